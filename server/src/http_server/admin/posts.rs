use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use color_eyre::eyre::eyre;
use maud::{html, Markup, Render};
use posts::{date::ByRecency, Post, PUBLISHED_STATUS};

use crate::{posts_api::ApiError, AppState};

use super::{
    super::{
        errors::ServerError,
        templates::{base_constrained, buttons::LinkButton},
    },
    PostedDate,
};

/// Listing view over the remote posts collection.
///
/// One GET of the listing page is one mounted instance: the view loads the
/// collection exactly once, and every later transition works on the local
/// list without another fetch. No transition leads back to `Loading`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum PostsListView {
    Loading,
    Failed {
        message: String,
    },
    Ready {
        posts: Vec<Post>,
        error: Option<String>,
    },
}

impl PostsListView {
    pub(crate) fn mount() -> Self {
        Self::Loading
    }

    /// Outcome of the one fetch a mounted view performs. Success stores the
    /// collection newest-first; any failure keeps its message and nothing
    /// else.
    pub(crate) fn finish_load(self, outcome: Result<Vec<Post>, ApiError>) -> Self {
        match outcome {
            Ok(mut posts) => {
                posts.sort_by_recency();

                Self::Ready { posts, error: None }
            }
            Err(err) => Self::Failed {
                message: err.to_string(),
            },
        }
    }

    /// Outcome of a confirmed delete for one row. Success drops the row from
    /// the local list; failure keeps the row visible and surfaces the
    /// message next to the intact table. Outside `Ready` this is a no-op.
    pub(crate) fn finish_delete(self, id: i64, outcome: Result<(), ApiError>) -> Self {
        let Self::Ready { mut posts, .. } = self else {
            return self;
        };

        match outcome {
            Ok(()) => {
                posts.retain(|post| post.id != id);

                Self::Ready { posts, error: None }
            }
            Err(err) => Self::Ready {
                posts,
                error: Some(err.to_string()),
            },
        }
    }

    pub(crate) fn render(&self) -> Markup {
        match self {
            Self::Loading => html! {
                div { "Loading..." }
            },
            Self::Failed { message } => html! {
                div class="text-red-700" { "Error: " (message) }
            },
            Self::Ready { posts, error } => html! {
                div class="space-y-6" {
                    div class="flex items-center justify-between" {
                        h1 class="text-3xl font-bold" { "Posts" }
                        (LinkButton::primary(html! { "New Post" }, "/admin/posts/new"))
                    }

                    @if let Some(error) = error {
                        div class="rounded-md border border-red-300 bg-red-50 px-4 py-2 text-red-700" {
                            "Error: " (error)
                        }
                    }

                    div class="overflow-x-auto rounded-md border" {
                        table class="min-w-full divide-y divide-gray-200" {
                            thead class="bg-gray-100" {
                                tr {
                                    th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider" { "Title" }
                                    th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider" { "Status" }
                                    th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider" { "Date" }
                                    th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider" { "Author" }
                                    th class="px-6 py-3 text-right text-xs font-medium text-gray-500 uppercase tracking-wider" { "Actions" }
                                }
                            }
                            tbody class="bg-white divide-y divide-gray-200" {
                                @for post in posts {
                                    tr {
                                        td class="px-6 py-4 whitespace-nowrap text-sm font-medium" {
                                            a href=(format!("/admin/posts/{}", post.id)) class="hover:underline" {
                                                (post.title)
                                            }
                                        }
                                        td class="px-6 py-4 whitespace-nowrap" {
                                            (StatusBadge(&post.status))
                                        }
                                        td class="px-6 py-4 whitespace-nowrap text-sm" {
                                            (PostedDate(post.created_at))
                                        }
                                        td class="px-6 py-4 whitespace-nowrap text-sm" {
                                            (post.author)
                                        }
                                        td class="px-6 py-4 whitespace-nowrap text-right text-sm space-x-2" {
                                            a href=(format!("/admin/posts/{}", post.id))
                                                class="text-blue-500 hover:text-blue-700 hover:underline" {
                                                "Edit"
                                            }
                                            a href=(format!("/admin/posts/{}/delete", post.id))
                                                class="text-red-500 hover:text-red-700 hover:underline" {
                                                "Delete"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            },
        }
    }
}

/// Published posts get the green badge, everything else the amber one.
pub(crate) struct StatusBadge<'a>(pub(crate) &'a str);

impl Render for StatusBadge<'_> {
    fn render(&self) -> Markup {
        let classes = if self.0 == PUBLISHED_STATUS {
            "bg-green-100 text-green-800"
        } else {
            "bg-yellow-100 text-yellow-800"
        };

        html! {
            span class={"inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-semibold " (classes)} {
                (self.0)
            }
        }
    }
}

pub(crate) async fn posts_index(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, ServerError> {
    let view = PostsListView::mount().finish_load(app_state.posts_api.list_posts().await);

    Ok(base_constrained(view.render()))
}

pub(crate) async fn delete_post_confirm(
    Path(id): Path<i64>,
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, ServerError> {
    let posts = app_state.posts_api.list_posts().await?;
    let post = posts
        .into_iter()
        .find(|post| post.id == id)
        .ok_or_else(|| ServerError(eyre!("Post not found"), StatusCode::NOT_FOUND))?;

    Ok(base_constrained(html! {
        div class="space-y-6" {
            h1 class="text-3xl font-bold" { "Delete Post" }

            p { "Are you sure you want to delete this post?" }

            div class="rounded-md border bg-white px-4 py-2" {
                p class="font-medium" { (post.title) }
                p class="text-sm text-gray-500" {
                    "By " (post.author) " on " (PostedDate(post.created_at))
                }
            }

            div class="flex items-center space-x-4" {
                form method="post" action=(format!("/admin/posts/{id}/delete")) class="inline" {
                    button type="submit"
                        class="px-4 py-2 rounded font-semibold bg-red-600 text-white" {
                        "Delete"
                    }
                }
                (LinkButton::secondary(html! { "Cancel" }, "/admin/posts"))
            }
        }
    }))
}

pub(crate) async fn delete_post(
    Path(id): Path<i64>,
    State(app_state): State<AppState>,
) -> Result<Response, ServerError> {
    let outcome = app_state.posts_api.delete_post(id).await;

    if outcome.is_ok() {
        return Ok(Redirect::to("/admin/posts").into_response());
    }

    // Failed delete: the listing stays up with the row intact and the
    // failure surfaced above the table.
    let view = PostsListView::mount()
        .finish_load(app_state.posts_api.list_posts().await)
        .finish_delete(id, outcome);

    Ok(base_constrained(view.render()).into_response())
}
