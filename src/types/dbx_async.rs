// Copyright (c) 2019-2024 Dropbox, Inc.

use serde::{Deserialize, Serialize};

pub type AsyncJobId = String;

tagged_union! {
    /// Result returned by methods that launch an asynchronous job.
    pub enum LaunchResultBase: open {
        /// This response indicates that the processing is asynchronous. The string is an id that
        /// can be used to obtain the status of the asynchronous job.
        AsyncJobId(AsyncJobId) = "async_job_id",
    }
}

tagged_union! {
    /// Result returned by methods that may either launch an asynchronous job or complete
    /// synchronously.
    pub enum LaunchEmptyResult: open {
        AsyncJobId(AsyncJobId) = "async_job_id",
        /// The job finished synchronously and successfully.
        Complete = "complete",
    }
}

/// Arguments for methods that poll the status of an asynchronous job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive] // structs may have more fields added in the future.
pub struct PollArg {
    /// Id of the asynchronous job. This is the value of a response returned from the method that
    /// launched the job.
    pub async_job_id: AsyncJobId,
}

impl PollArg {
    pub fn new(async_job_id: AsyncJobId) -> Self {
        PollArg { async_job_id }
    }
}

tagged_union! {
    pub enum PollEmptyResult: open {
        /// The asynchronous job is still in progress.
        InProgress = "in_progress",
        /// The asynchronous job has completed successfully.
        Complete = "complete",
    }
}

tagged_union! {
    /// Error returned by methods for polling the status of asynchronous job.
    pub enum PollError: open {
        /// The job ID is invalid.
        InvalidAsyncJobId = "invalid_async_job_id",
        /// Something went wrong with the job on Dropbox's end. You'll need to verify that the
        /// action you were taking succeeded, and if not, try again. This should happen very rarely.
        InternalError = "internal_error",
    }
}

api_error!(PollError);
