use reelscout_client::{MovieSource, OmdbClient};
use reelscout_types::{LookupResult, SearchResult};
use std::sync::mpsc::{Receiver, Sender};

#[derive(Debug)]
pub(crate) enum WorkerJob {
    Search { request_id: u64, term: String },
    Lookup { imdb_id: String },
}

#[derive(Debug)]
pub(crate) enum WorkerReply {
    SearchDone {
        request_id: u64,
        result: SearchResult,
    },
    LookupDone(LookupResult),
}

/// Network loop for the widget. Jobs run one at a time in arrival order; a
/// transport failure is terminal for that request and produces no reply, so
/// the widget at worst keeps showing stale or empty state.
pub(crate) fn run_worker(
    client: OmdbClient,
    jobs: Receiver<WorkerJob>,
    replies: Sender<WorkerReply>,
) {
    while let Ok(job) = jobs.recv() {
        let reply = match job {
            WorkerJob::Search { request_id, term } => match client.search(&term) {
                Ok(result) => WorkerReply::SearchDone { request_id, result },
                Err(_) => continue,
            },
            WorkerJob::Lookup { imdb_id } => match client.lookup(&imdb_id) {
                Ok(result) => WorkerReply::LookupDone(result),
                Err(_) => continue,
            },
        };

        if replies.send(reply).is_err() {
            break;
        }
    }
}
