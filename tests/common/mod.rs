//! Shared harness: an API server on a random local port

#![allow(dead_code)]

use std::sync::Mutex;

use annotation_hub::api::create_router_with_state;
use annotation_hub::config::{AppConfig, UserConfig, DEFAULT_API_KEY, DEFAULT_USERNAME};
use annotation_hub::domain::UserRole;
use annotation_hub::{create_app_state_with_config, Client, ClientConfig};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub const MOCK_USER: &str = "mock-user";
pub const ANNOTATOR: &str = "annotator";

fn test_users() -> Vec<UserConfig> {
    vec![
        UserConfig::new(DEFAULT_USERNAME, UserRole::Admin, DEFAULT_API_KEY),
        UserConfig::new(MOCK_USER, UserRole::Annotator, "mock-user.apikey"),
        UserConfig::new(ANNOTATOR, UserRole::Annotator, "annotator.apikey"),
    ]
}

pub struct TestServer {
    pub base_url: String,
    users: Vec<UserConfig>,
    current_key: Mutex<String>,
    handle: JoinHandle<()>,
}

impl TestServer {
    pub async fn start() -> Self {
        let users = test_users();
        let config = AppConfig {
            users: users.clone(),
            ..AppConfig::default()
        };

        let state = create_app_state_with_config(&config).await.unwrap();
        let app = create_router_with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            users,
            current_key: Mutex::new(DEFAULT_API_KEY.to_string()),
            handle,
        }
    }

    /// Client acting as the current user
    pub fn client(&self) -> Client {
        let key = self.current_key.lock().unwrap().clone();
        Client::new(ClientConfig::new(&self.base_url, key)).unwrap()
    }

    /// Act as another configured user from now on
    pub fn change_current_user(&self, username: &str) {
        let user = self
            .users
            .iter()
            .find(|u| u.username == username)
            .unwrap_or_else(|| panic!("unknown test user '{}'", username));

        *self.current_key.lock().unwrap() = user.api_key.clone();
    }

    pub fn reset_default_user(&self) {
        *self.current_key.lock().unwrap() = DEFAULT_API_KEY.to_string();
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
