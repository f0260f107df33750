//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every fetch runs in its own tokio task and reports back with a message
//! carrying the generation it was issued under. Tasks never touch state.

use std::sync::Arc;

use cinemax_api::MovieApi;
use tokio::sync::mpsc;
use tracing::debug;

use crate::debounce::Debouncer;
use crate::detail::DETAIL_FAILED_MESSAGE;
use crate::message::Message;
use crate::recommendation::RECOMMEND_FAILED_MESSAGE;
use crate::UpdateAction;

/// Execute an action, spawning a background task where it needs the network
pub fn handle_action<A>(
    action: UpdateAction,
    api: &Arc<A>,
    msg_tx: &mpsc::Sender<Message>,
    debouncer: &mut Debouncer,
) where
    A: MovieApi + Sync + 'static,
{
    match action {
        UpdateAction::ScheduleSuggestions { generation, delay } => {
            debouncer.schedule(
                delay,
                msg_tx.clone(),
                Message::SuggestionDebounceElapsed { generation },
            );
        }

        UpdateAction::CancelSuggestions => debouncer.cancel(),

        UpdateAction::FetchSuggestions { generation, query } => {
            debug!("Fetching suggestions {} for '{}'", generation, query);
            let api = Arc::clone(api);
            let tx = msg_tx.clone();
            tokio::spawn(async move {
                let msg = match api.autocomplete(&query).await {
                    Ok(suggestions) => Message::SuggestionsLoaded {
                        generation,
                        query,
                        suggestions,
                    },
                    Err(e) => Message::SuggestionsFailed {
                        generation,
                        query,
                        error: e.to_string(),
                    },
                };
                let _ = tx.send(msg).await;
            });
        }

        UpdateAction::FetchRecommendations { generation, title } => {
            let api = Arc::clone(api);
            let tx = msg_tx.clone();
            tokio::spawn(async move {
                let msg = match api.recommend(&title).await {
                    Ok(movies) => Message::RecommendationsLoaded {
                        generation,
                        title,
                        movies,
                    },
                    Err(e) => Message::RecommendationsFailed {
                        generation,
                        title,
                        error: e.user_message(RECOMMEND_FAILED_MESSAGE),
                    },
                };
                let _ = tx.send(msg).await;
            });
        }

        UpdateAction::FetchTopMovies => {
            let api = Arc::clone(api);
            let tx = msg_tx.clone();
            tokio::spawn(async move {
                let msg = match api.top_movies().await {
                    Ok(movies) => Message::TopMoviesLoaded { movies },
                    Err(e) => Message::TopMoviesFailed {
                        error: e.to_string(),
                    },
                };
                let _ = tx.send(msg).await;
            });
        }

        UpdateAction::FetchGenreCatalog => {
            let api = Arc::clone(api);
            let tx = msg_tx.clone();
            tokio::spawn(async move {
                let msg = match api.genres().await {
                    Ok(genres) => Message::GenreCatalogLoaded { genres },
                    Err(e) => Message::GenreCatalogFailed {
                        error: e.to_string(),
                    },
                };
                let _ = tx.send(msg).await;
            });
        }

        UpdateAction::FetchGenreMovies { generation, genre } => {
            let api = Arc::clone(api);
            let tx = msg_tx.clone();
            tokio::spawn(async move {
                let msg = match api.movies_by_genre(&genre).await {
                    Ok(movies) => Message::GenreMoviesLoaded {
                        generation,
                        genre,
                        movies,
                    },
                    Err(e) => Message::GenreMoviesFailed {
                        generation,
                        genre,
                        error: e.to_string(),
                    },
                };
                let _ = tx.send(msg).await;
            });
        }

        UpdateAction::FetchMovieDetail {
            generation,
            movie_id,
        } => {
            let api = Arc::clone(api);
            let tx = msg_tx.clone();
            tokio::spawn(async move {
                let msg = match api.movie_detail(movie_id).await {
                    Ok(detail) => Message::DetailLoaded {
                        generation,
                        movie_id,
                        detail: Box::new(detail),
                    },
                    Err(e) => Message::DetailFailed {
                        generation,
                        movie_id,
                        error: e.user_message(DETAIL_FAILED_MESSAGE),
                    },
                };
                let _ = tx.send(msg).await;
            });
        }
    }
}
