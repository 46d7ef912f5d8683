//! Cassandra/ScyllaDB tweet store over CQL
//!
//! Expects the table to exist already:
//!
//! ```cql
//! CREATE TABLE tweet (timeline text, id timeuuid, text text, PRIMARY KEY (timeline, id));
//! ```

use crate::config::CassandraConfig;
use anyhow::{Context, Result as AnyResult};
use async_trait::async_trait;
use scylla::execution_profile::ExecutionProfile;
use scylla::frame::value::CqlTimeuuid;
use scylla::prepared_statement::PreparedStatement;
use scylla::statement::Consistency as CqlConsistency;
use scylla::transport::errors::{DbError, QueryError};
use scylla::{Session, SessionBuilder};
use std::sync::Arc;
use tracing::{debug, info};
use tunefeed_core::ports::TweetStore;
use tunefeed_core::{Consistency, Result, Tweet, TunefeedError};
use uuid::Uuid;

const INSERT_TWEET: &str = "INSERT INTO tweet (timeline, id, text) VALUES (?, ?, ?)";
const SELECT_ALL_TWEETS: &str = "SELECT timeline, id, text FROM tweet";
const SELECT_TIMELINE_TWEET: &str =
    "SELECT timeline, id, text FROM tweet WHERE timeline = ? LIMIT 1";

type TweetRow = (String, CqlTimeuuid, String);

pub struct CqlTweetStore {
    session: Arc<Session>,
    insert: PreparedStatement,
    select_all: PreparedStatement,
    select_timeline: PreparedStatement,
}

impl CqlTweetStore {
    /// Open a session against the configured cluster and prepare statements.
    ///
    /// The session's default consistency is the write consistency; the
    /// single-timeline read overrides it per statement.
    pub async fn connect(config: &CassandraConfig) -> AnyResult<Self> {
        info!(
            "Connecting to Cassandra: nodes={:?}, keyspace={}",
            config.nodes, config.keyspace
        );

        let profile = ExecutionProfile::builder()
            .consistency(to_cql(config.write_consistency))
            .request_timeout(Some(config.request_timeout()))
            .build();

        let session = config
            .nodes
            .iter()
            .fold(SessionBuilder::new(), |builder, node| builder.known_node(node))
            .use_keyspace(&config.keyspace, false)
            .connection_timeout(config.connection_timeout())
            .default_execution_profile_handle(profile.into_handle())
            .build()
            .await
            .with_context(|| format!("Failed to connect to Cassandra at {:?}", config.nodes))?;

        info!("Cassandra session established, preparing statements...");
        Self::with_session(Arc::new(session), config).await
    }

    pub async fn with_session(session: Arc<Session>, config: &CassandraConfig) -> AnyResult<Self> {
        let mut insert = session
            .prepare(INSERT_TWEET)
            .await
            .context("Failed to prepare tweet insert")?;
        insert.set_consistency(to_cql(config.write_consistency));

        let select_all = session
            .prepare(SELECT_ALL_TWEETS)
            .await
            .context("Failed to prepare tweet scan")?;

        let mut select_timeline = session
            .prepare(SELECT_TIMELINE_TWEET)
            .await
            .context("Failed to prepare timeline lookup")?;
        select_timeline.set_consistency(to_cql(config.read_consistency));

        info!(
            "Tweet statements prepared (write={}, timeline read={})",
            config.write_consistency, config.read_consistency
        );

        Ok(Self {
            session,
            insert,
            select_all,
            select_timeline,
        })
    }
}

#[async_trait]
impl TweetStore for CqlTweetStore {
    async fn insert(&self, tweet: &Tweet) -> Result<()> {
        let id = Uuid::parse_str(&tweet.id)
            .map_err(|e| TunefeedError::InvalidInput(format!("tweet id {}: {}", tweet.id, e)))?;

        self.session
            .execute(
                &self.insert,
                (tweet.timeline.as_str(), CqlTimeuuid::from(id), tweet.text.as_str()),
            )
            .await
            .map_err(classify)?;

        debug!("Inserted tweet {} into timeline {}", tweet.id, tweet.timeline);
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Tweet>> {
        let result = self
            .session
            .execute(&self.select_all, ())
            .await
            .map_err(classify)?;

        let rows = result
            .rows_typed::<TweetRow>()
            .map_err(|e| TunefeedError::Decode(e.to_string()))?;

        rows.map(|row| {
            row.map(into_tweet)
                .map_err(|e| TunefeedError::Decode(e.to_string()))
        })
        .collect()
    }

    async fn find_by_timeline(&self, timeline: &str) -> Result<Option<Tweet>> {
        let result = self
            .session
            .execute(&self.select_timeline, (timeline,))
            .await
            .map_err(classify)?;

        let row = result
            .maybe_first_row_typed::<TweetRow>()
            .map_err(|e| TunefeedError::Decode(e.to_string()))?;

        Ok(row.map(into_tweet))
    }

    fn backend(&self) -> &'static str {
        "cassandra"
    }
}

fn into_tweet((timeline, id, text): TweetRow) -> Tweet {
    Tweet {
        id: Uuid::from(id).to_string(),
        timeline,
        text,
    }
}

fn to_cql(level: Consistency) -> CqlConsistency {
    match level {
        Consistency::Any => CqlConsistency::Any,
        Consistency::One => CqlConsistency::One,
        Consistency::Two => CqlConsistency::Two,
        Consistency::Three => CqlConsistency::Three,
        Consistency::Quorum => CqlConsistency::Quorum,
        Consistency::All => CqlConsistency::All,
        Consistency::LocalQuorum => CqlConsistency::LocalQuorum,
        Consistency::EachQuorum => CqlConsistency::EachQuorum,
        Consistency::LocalOne => CqlConsistency::LocalOne,
    }
}

/// Split driver errors into transient (worth retrying later) and permanent
fn classify(err: QueryError) -> TunefeedError {
    let transient = match &err {
        QueryError::IoError(_) | QueryError::TimeoutError | QueryError::RequestTimeout(_) => true,
        QueryError::DbError(db, _) => is_transient_db_error(db),
        _ => false,
    };

    if transient {
        TunefeedError::StorageUnavailable(err.to_string())
    } else {
        TunefeedError::Query(err.to_string())
    }
}

fn is_transient_db_error(err: &DbError) -> bool {
    matches!(
        err,
        DbError::Unavailable { .. }
            | DbError::Overloaded
            | DbError::IsBootstrapping
            | DbError::ReadTimeout { .. }
            | DbError::WriteTimeout { .. }
    )
}
