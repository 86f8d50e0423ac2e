use thiserror::Error;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("unit is already attached; detach before re-attaching")]
    AlreadyAttached,

    #[error("event {event:?} declares handler method {method:?}, which the unit does not resolve")]
    UnresolvedHandler {
        event:  String,
        method: &'static str,
    },
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
