//! MongoDB persistence layer for the Eutian site backend.
//!
//! [`Store`] wraps the driver's database handle. The client connects
//! lazily and is safe to share across requests, so one `Store` is created
//! at startup and cloned into the router state; the driver's internal
//! pooling does the rest.

pub mod models;
pub mod repositories;

use std::time::Duration;

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};

use models::lead::LeadDocument;
use models::prototype::PrototypeDocument;
use models::review::ReviewDocument;

/// Collection names.
const LEADS: &str = "leads";
const PROTOTYPES: &str = "prototypes";
const REVIEWS: &str = "reviews";

/// How long the driver waits for a reachable server before failing an
/// operation. The default (30s) outlives the request timeout, so failures
/// would surface as gateway timeouts instead of store errors.
const SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(5);

/// Shared handle to the document store.
#[derive(Clone)]
pub struct Store {
    db: Database,
}

impl Store {
    /// Build a store from a connection string and database name.
    ///
    /// No I/O happens here beyond parsing the connection string; the
    /// driver dials the server on first use.
    pub async fn connect(uri: &str, db_name: &str) -> Result<Self, mongodb::error::Error> {
        let mut options = ClientOptions::parse(uri).await?;
        options.server_selection_timeout = Some(SERVER_SELECTION_TIMEOUT);
        let client = Client::with_options(options)?;
        Ok(Self {
            db: client.database(db_name),
        })
    }

    /// Ping the server to verify the store is reachable.
    pub async fn health_check(&self) -> Result<(), mongodb::error::Error> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    /// The `leads` collection.
    pub fn leads(&self) -> Collection<LeadDocument> {
        self.db.collection(LEADS)
    }

    /// The `prototypes` collection.
    pub fn prototypes(&self) -> Collection<PrototypeDocument> {
        self.db.collection(PROTOTYPES)
    }

    /// The `reviews` collection.
    pub fn reviews(&self) -> Collection<ReviewDocument> {
        self.db.collection(REVIEWS)
    }
}
