//! Store contracts and their error types.
//!
//! The entry UI talks to two collaborators: a directory that resolves a
//! free-text query to a member, and a schedule store that exchanges whole
//! availability maps in single bulk requests. Both are traits so the
//! session logic runs against the in-memory implementation in tests and
//! against a remote backend in production.

use thiserror::Error;
use uuid::Uuid;

use kt_core::MemberRef;

use crate::schedule_map::ScheduleMap;

/// Failure of a directory lookup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The query was empty after trimming.
    #[error("empty lookup query")]
    EmptyQuery,

    /// Nothing matched the query, neither as a member number nor as a
    /// member UUID.
    #[error("no member matched {query:?}")]
    NotFound {
        /// The query that found nothing.
        query: String,
    },

    /// The directory could not be reached or answered malformed data.
    #[error("directory transport failure: {reason}")]
    Transport {
        /// Short description of the failure.
        reason: String,
    },
}

impl LookupError {
    /// The message shown to the member on the entry screen.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            LookupError::EmptyQuery => "会員番号を入力してください",
            LookupError::NotFound { .. } => "会員が見つかりません",
            LookupError::Transport { .. } => "通信エラーが発生しました",
        }
    }
}

/// Failure of a schedule fetch or save.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store answered with an application-level error message.
    #[error("store rejected the request: {message}")]
    Rejected {
        /// Message supplied by the store.
        message: String,
    },

    /// The store could not be reached or answered malformed data.
    #[error("store transport failure: {reason}")]
    Transport {
        /// Short description of the failure.
        reason: String,
    },
}

impl StoreError {
    /// The message shown to the member on the entry screen.
    ///
    /// A rejection without a message falls back to the generic save
    /// failure text.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            StoreError::Rejected { message } if !message.is_empty() => message,
            StoreError::Rejected { .. } => "保存に失敗しました",
            StoreError::Transport { .. } => "通信エラーが発生しました",
        }
    }
}

/// Resolves free-text queries to members.
pub trait MemberDirectory {
    /// Looks up a member by number first, then by UUID.
    fn lookup(&self, query: &str) -> Result<MemberRef, LookupError>;
}

impl<D: MemberDirectory + ?Sized> MemberDirectory for &D {
    fn lookup(&self, query: &str) -> Result<MemberRef, LookupError> {
        (**self).lookup(query)
    }
}

/// Exchanges whole availability maps for one member at a time.
pub trait ScheduleStore {
    /// Fetches the stored map for a member, restricted to the dates the
    /// store currently accepts.
    fn fetch(&self, member: Uuid) -> Result<ScheduleMap, StoreError>;

    /// Persists the full map for a member in one request.
    fn save(&mut self, member: Uuid, schedules: &ScheduleMap) -> Result<(), StoreError>;
}

impl<S: ScheduleStore + ?Sized> ScheduleStore for &mut S {
    fn fetch(&self, member: Uuid) -> Result<ScheduleMap, StoreError> {
        (**self).fetch(member)
    }

    fn save(&mut self, member: Uuid, schedules: &ScheduleMap) -> Result<(), StoreError> {
        (**self).save(member, schedules)
    }
}
