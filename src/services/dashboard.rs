// src/services/dashboard.rs
use sqlx::{PgConnection, PgPool};
use crate::dtos::dashboard::{DashboardStats, SeriesPoint};

/// Grouping key for the sales and purchase series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupPeriod {
    Timestamp,
    Day,
}

impl GroupPeriod {
    pub fn from_param(period: Option<&str>) -> Self {
        match period {
            Some(p) if p.eq_ignore_ascii_case("day") => GroupPeriod::Day,
            _ => GroupPeriod::Timestamp,
        }
    }

    fn group_expr(self) -> &'static str {
        match self {
            GroupPeriod::Timestamp => "recorded_at",
            GroupPeriod::Day => "date_trunc('day', recorded_at AT TIME ZONE 'UTC') AT TIME ZONE 'UTC'",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EntityCounts {
    pub categories: i64,
    pub products: i64,
    pub suppliers: i64,
    pub purchases: i64,
    pub sales: i64,
}

/// Reads every count and series from one read-only snapshot.
pub async fn fetch_stats(pool: &PgPool, period: GroupPeriod) -> Result<DashboardStats, sqlx::Error> {
    let mut tx = pool.begin().await?;
    sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
        .execute(&mut *tx)
        .await?;

    let counts = EntityCounts {
        categories: count_rows(&mut tx, "categories").await?,
        products: count_rows(&mut tx, "products").await?,
        suppliers: count_rows(&mut tx, "suppliers").await?,
        purchases: count_rows(&mut tx, "purchases").await?,
        sales: count_rows(&mut tx, "sales").await?,
    };
    let sales = totals_by_period(&mut tx, "sales", period).await?;
    let purchases = totals_by_period(&mut tx, "purchases", period).await?;

    tx.commit().await?;
    Ok(summarize(counts, sales, purchases))
}

async fn count_rows(conn: &mut PgConnection, table: &'static str) -> Result<i64, sqlx::Error> {
    let sql = format!("SELECT COUNT(*) FROM {table}");
    sqlx::query_scalar::<_, i64>(&sql).fetch_one(&mut *conn).await
}

async fn totals_by_period(
    conn: &mut PgConnection,
    table: &'static str,
    period: GroupPeriod,
) -> Result<Vec<SeriesPoint>, sqlx::Error> {
    let sql = format!(
        "SELECT {expr} AS date,
                LEAST(COALESCE(SUM(total_price), 0), {max})::BIGINT AS total
         FROM {table}
         GROUP BY 1
         ORDER BY 1",
        expr = period.group_expr(),
        max = i64::MAX,
    );
    sqlx::query_as::<_, SeriesPoint>(&sql).fetch_all(&mut *conn).await
}

pub fn summarize(counts: EntityCounts, sales: Vec<SeriesPoint>, purchases: Vec<SeriesPoint>) -> DashboardStats {
    let total_revenue = saturating_sum(&sales);
    let total_purchases_amount = saturating_sum(&purchases);

    DashboardStats {
        total_categories: counts.categories,
        total_products: counts.products,
        total_suppliers: counts.suppliers,
        total_purchases: counts.purchases,
        total_sales: counts.sales,
        total_revenue,
        total_purchases_amount,
        total_sales_amount: total_revenue,
        sales_data: sales,
        purchase_data: purchases,
    }
}

// Totals clamp at i64::MAX like line totals do.
fn saturating_sum(points: &[SeriesPoint]) -> i64 {
    points.iter().fold(0_i64, |acc, p| acc.saturating_add(p.total))
}
