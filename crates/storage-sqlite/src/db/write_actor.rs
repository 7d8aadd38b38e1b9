//! Single-writer actor: owns one connection and applies every mutation
//! serially inside an immediate transaction. SQLite allows one writer at
//! a time; funnelling writes through one task avoids SQLITE_BUSY churn and
//! gives multi-statement operations (such as start-scheduled-workout) an
//! atomic compare-and-set for free.

use std::any::Any;

use diesel::{Connection, SqliteConnection};
use tokio::sync::{mpsc, oneshot};
use trainlog_core::errors::Result;

use super::DbPool;
use crate::errors::StorageError;

type Job<T> = Box<dyn FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static>;

type ErasedJob = Job<Box<dyn Any + Send + 'static>>;
type ErasedReply = oneshot::Sender<Result<Box<dyn Any + Send + 'static>>>;

/// Handle for sending jobs to the writer actor.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::Sender<(ErasedJob, ErasedReply)>,
}

impl WriteHandle {
    /// Runs a closure on the writer's connection, inside a transaction,
    /// and returns its result.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + 'static + Any,
    {
        let (ret_tx, ret_rx) = oneshot::channel();

        self.tx
            .send((
                Box::new(move |c| job(c).map(|v| Box::new(v) as Box<dyn Any + Send>)),
                ret_tx,
            ))
            .await
            .expect("writer actor channel closed");

        ret_rx
            .await
            .expect("writer actor dropped the reply sender")
            .map(|boxed: Box<dyn Any + Send + 'static>| {
                *boxed
                    .downcast::<T>()
                    .unwrap_or_else(|_| panic!("writer actor result had the wrong type"))
            })
    }
}

/// Spawns the writer task. It holds one pooled connection for its whole
/// lifetime and processes jobs in arrival order.
pub fn spawn_writer(pool: DbPool) -> WriteHandle {
    let (tx, mut rx) = mpsc::channel::<(ErasedJob, ErasedReply)>(1024);

    tokio::spawn(async move {
        let mut conn = pool
            .get()
            .expect("failed to acquire the writer actor's connection");

        while let Some((job, reply_tx)) = rx.recv().await {
            // Jobs return core errors; the transaction wrapper needs a
            // diesel-convertible error type, so hop through StorageError.
            let result: Result<Box<dyn Any + Send + 'static>> = conn
                .immediate_transaction::<_, StorageError, _>(|c| {
                    job(c).map_err(StorageError::from)
                })
                .map_err(|e: StorageError| e.into());

            // The requester may have gone away; nothing to do then.
            let _ = reply_tx.send(result);
        }
    });

    WriteHandle { tx }
}
