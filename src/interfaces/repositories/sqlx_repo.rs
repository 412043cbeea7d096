use sqlx::PgPool;

#[derive(Clone)]
pub struct SqlxEmployeeRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxUserFeedRepo {
    pub pool: PgPool,
}
