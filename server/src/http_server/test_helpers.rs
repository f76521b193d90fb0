use std::sync::{
    atomic::{AtomicBool, AtomicUsize},
    Arc, Mutex,
};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, Response},
    Router,
};
use posts::Post;
use url::Url;

use crate::{
    posts_api::{ApiError, PostsApi},
    AppConfig, AppState,
};

/// In-memory stand-in for the collection resource. Records every call so
/// tests can assert on what the handlers actually issued.
pub(crate) struct FakePostsApi {
    pub(crate) posts: Mutex<Vec<Post>>,
    pub(crate) fail_list: AtomicBool,
    pub(crate) fail_delete: AtomicBool,
    pub(crate) list_calls: AtomicUsize,
    pub(crate) delete_calls: Mutex<Vec<i64>>,
}

impl FakePostsApi {
    pub(crate) fn with_posts(posts: Vec<Post>) -> Arc<Self> {
        Arc::new(Self {
            posts: Mutex::new(posts),
            fail_list: AtomicBool::new(false),
            fail_delete: AtomicBool::new(false),
            list_calls: AtomicUsize::new(0),
            delete_calls: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl PostsApi for FakePostsApi {
    async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        self.list_calls
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);

        if self.fail_list.load(std::sync::atomic::Ordering::SeqCst) {
            return Err(ApiError::Status {
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                body: "Failed to fetch posts".to_string(),
            });
        }

        Ok(self.posts.lock().unwrap().clone())
    }

    async fn delete_post(&self, id: i64) -> Result<(), ApiError> {
        self.delete_calls.lock().unwrap().push(id);

        if self.fail_delete.load(std::sync::atomic::Ordering::SeqCst) {
            return Err(ApiError::Status {
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                body: "Failed to delete post".to_string(),
            });
        }

        self.posts.lock().unwrap().retain(|post| post.id != id);

        Ok(())
    }
}

pub(crate) fn create_test_app(posts_api: Arc<dyn PostsApi>) -> Router {
    let state = AppState {
        app: AppConfig {
            base_url: Url::parse("http://localhost:3000").unwrap(),
        },
        posts_api,
    };

    super::routes::make_router().with_state(state)
}

pub(crate) fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub(crate) fn post(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub(crate) async fn response_body_string(response: Response<Body>) -> String {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    String::from_utf8(body_bytes.to_vec()).unwrap()
}
