//! PostgreSQL ledger

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, Row, Transaction};

use super::{AccountId, LedgerStore, LedgerTx, StoreError};

/// Ledger over the `accounts` table (see [`crate::db::ACCOUNTS_SCHEMA`]).
#[derive(Clone)]
pub struct PgLedger {
    pool: PgPool,
}

impl PgLedger {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LedgerStore for PgLedger {
    fn name(&self) -> &'static str {
        "postgres"
    }

    async fn begin(&self) -> Result<Box<dyn LedgerTx>, StoreError> {
        let tx = self.pool.begin().await?;
        Ok(Box::new(PgLedgerTx { tx }))
    }

    async fn query_balance(&self, account_id: AccountId) -> Result<Option<Decimal>, StoreError> {
        let row = sqlx::query("SELECT balance FROM accounts WHERE account_id = $1")
            .bind(account_id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(r) => Ok(Some(r.try_get::<Decimal, _>("balance")?)),
            None => Ok(None),
        }
    }

    async fn insert_account(
        &self,
        account_id: AccountId,
        balance: Decimal,
    ) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO accounts (account_id, balance) VALUES ($1, $2)")
            .bind(account_id)
            .bind(balance)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Wraps a sqlx transaction, which issues ROLLBACK when dropped un-committed.
struct PgLedgerTx {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl LedgerTx for PgLedgerTx {
    async fn apply_delta(
        &mut self,
        account_id: AccountId,
        delta: Decimal,
    ) -> Result<Option<Decimal>, StoreError> {
        // Relative update: the row lock taken here serializes concurrent
        // transfers, and the new balance is derived from the locked value.
        let row = sqlx::query(
            "UPDATE accounts SET balance = balance + $1
             WHERE account_id = $2
             RETURNING balance",
        )
        .bind(delta)
        .bind(account_id)
        .fetch_optional(&mut *self.tx)
        .await?;

        match row {
            Some(r) => Ok(Some(r.try_get::<Decimal, _>("balance")?)),
            None => Ok(None),
        }
    }

    async fn commit(self: Box<Self>) -> Result<(), StoreError> {
        self.tx.commit().await?;
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<(), StoreError> {
        self.tx.rollback().await?;
        Ok(())
    }
}
