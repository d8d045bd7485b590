//! Background generation.
//!
//! Generation is synchronous; this runs it on a dedicated thread so an
//! interactive caller is never blocked. Only the newest request matters:
//! requests superseded before they start are skipped and results for
//! superseded requests are discarded.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use tracing::{debug, trace};

use crate::config::GenerationOptions;
use crate::dungeon_gen::{generate, Dungeon};
use crate::error::{DungeonError, Result};

/// Room for the partitioner's recursion on the largest accepted maps
const WORKER_STACK_SIZE: usize = 32 * 1024 * 1024;

struct Request {
    ticket: u64,
    options: GenerationOptions,
}

struct Response {
    ticket: u64,
    result: Result<Dungeon>,
}

pub struct GeneratorWorker {
    requests: Option<Sender<Request>>,
    responses: Receiver<Response>,
    /// Ticket of the newest submitted request, shared with the thread
    latest: Arc<AtomicU64>,
    next_ticket: u64,
    pending: bool,
    handle: Option<JoinHandle<()>>,
}

impl GeneratorWorker {
    /// Start the worker thread.
    pub fn spawn() -> Result<Self> {
        let (request_tx, request_rx) = mpsc::channel::<Request>();
        let (response_tx, response_rx) = mpsc::channel::<Response>();
        let latest = Arc::new(AtomicU64::new(0));

        let thread_latest = Arc::clone(&latest);
        let handle = thread::Builder::new()
            .name("dungeon-generator".to_string())
            .stack_size(WORKER_STACK_SIZE)
            .spawn(move || run(request_rx, response_tx, thread_latest))
            .map_err(DungeonError::WorkerSpawn)?;

        Ok(Self {
            requests: Some(request_tx),
            responses: response_rx,
            latest,
            next_ticket: 0,
            pending: false,
            handle: Some(handle),
        })
    }

    /// Queue a generation request, superseding any earlier one.
    /// Returns the request's ticket.
    pub fn submit(&mut self, options: GenerationOptions) -> Result<u64> {
        self.next_ticket += 1;
        let ticket = self.next_ticket;
        self.latest.store(ticket, Ordering::Release);

        let requests = self.requests.as_ref().ok_or(DungeonError::WorkerDisconnected)?;
        requests
            .send(Request { ticket, options })
            .map_err(|_| DungeonError::WorkerDisconnected)?;
        self.pending = true;
        Ok(ticket)
    }

    /// Block until the newest request has been generated.
    pub fn recv_latest(&mut self) -> Result<Dungeon> {
        if !self.pending {
            return Err(DungeonError::NoPendingRequest);
        }
        loop {
            let response = self.responses.recv().map_err(|_| DungeonError::WorkerDisconnected)?;
            if let Some(result) = self.accept(response) {
                return result;
            }
        }
    }

    /// Non-blocking variant of [`recv_latest`](Self::recv_latest). Returns
    /// `Ok(None)` while the newest request is still being generated.
    pub fn try_recv_latest(&mut self) -> Result<Option<Dungeon>> {
        if !self.pending {
            return Err(DungeonError::NoPendingRequest);
        }
        loop {
            match self.responses.try_recv() {
                Ok(response) => {
                    if let Some(result) = self.accept(response) {
                        return result.map(Some);
                    }
                }
                Err(TryRecvError::Empty) => return Ok(None),
                Err(TryRecvError::Disconnected) => return Err(DungeonError::WorkerDisconnected),
            }
        }
    }

    fn accept(&mut self, response: Response) -> Option<Result<Dungeon>> {
        if response.ticket != self.next_ticket {
            trace!(ticket = response.ticket, latest = self.next_ticket, "discarding superseded dungeon");
            return None;
        }
        self.pending = false;
        Some(response.result)
    }
}

impl Drop for GeneratorWorker {
    fn drop(&mut self) {
        // Closing the request channel ends the thread's loop
        self.requests.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn run(requests: Receiver<Request>, responses: Sender<Response>, latest: Arc<AtomicU64>) {
    while let Ok(mut request) = requests.recv() {
        // Jump to the newest queued request
        while let Ok(newer) = requests.try_recv() {
            request = newer;
        }
        if request.ticket < latest.load(Ordering::Acquire) {
            trace!(ticket = request.ticket, "skipping superseded request");
            continue;
        }

        debug!(ticket = request.ticket, seed = %request.options.seed, "generating in background");
        let result = generate(&request.options);
        let response = Response {
            ticket: request.ticket,
            result,
        };
        if responses.send(response).is_err() {
            break;
        }
    }
}
