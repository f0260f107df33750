//! Message processing
//!
//! Runs a message through the TEA update function, following up with any
//! messages it returns and dispatching every resulting action.

use std::sync::Arc;

use cinemax_api::MovieApi;
use tokio::sync::mpsc;

use crate::debounce::Debouncer;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

use super::actions::handle_action;

/// Process a message through the TEA update function
pub fn process_message<A>(
    state: &mut AppState,
    message: Message,
    api: &Arc<A>,
    msg_tx: &mpsc::Sender<Message>,
    debouncer: &mut Debouncer,
) where
    A: MovieApi + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, api, msg_tx, debouncer);
        }

        msg = result.message;
    }
}
