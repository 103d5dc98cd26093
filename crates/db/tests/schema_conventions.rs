use sqlx::PgPool;

/// All `id` columns must be bigint.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_pks_are_bigint(pool: PgPool) {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT table_name, data_type
         FROM information_schema.columns
         WHERE column_name = 'id'
           AND table_schema = 'public'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert_eq!(rows.len(), 10, "Expected ten entity tables with id columns");
    for (table, data_type) in &rows {
        assert_eq!(
            data_type, "bigint",
            "Table {table}.id should be bigint, got {data_type}"
        );
    }
}

/// Every lifecycle timestamp column must be timestamptz.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_date_columns_are_timestamptz(pool: PgPool) {
    let expected = [
        ("users", "registration_date"),
        ("car_owners", "registration_date"),
        ("booking_requests", "request_date"),
        ("reservations", "reservation_date"),
        ("payments", "payment_date"),
        ("reviews", "review_date"),
        ("notifications", "notification_date"),
        ("admins", "registration_date"),
    ];

    for (table, col) in expected {
        let result: Option<(String,)> = sqlx::query_as(&format!(
            "SELECT data_type
             FROM information_schema.columns
             WHERE table_schema = 'public'
               AND table_name = '{table}'
               AND column_name = '{col}'"
        ))
        .fetch_optional(&pool)
        .await
        .unwrap();

        let (data_type,) =
            result.unwrap_or_else(|| panic!("Table {table} is missing column {col}"));
        assert_eq!(
            data_type, "timestamp with time zone",
            "Table {table}.{col} should be timestamptz, got {data_type}"
        );
    }
}

/// No character varying columns should exist -- TEXT is preferred.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_no_varchar_columns(pool: PgPool) {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT table_name, column_name
         FROM information_schema.columns
         WHERE table_schema = 'public'
           AND data_type = 'character varying'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name, column_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(
        rows.is_empty(),
        "Found VARCHAR columns (should use TEXT): {:?}",
        rows
    );
}

/// Every column in the schema is NOT NULL; absent values are modelled
/// as empty strings or defaults, never NULL.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_no_nullable_columns(pool: PgPool) {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT table_name, column_name
         FROM information_schema.columns
         WHERE table_schema = 'public'
           AND is_nullable = 'YES'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name, column_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(rows.is_empty(), "Found nullable columns: {:?}", rows);
}

/// Every foreign key column must have a corresponding index.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_fks_have_indexes(pool: PgPool) {
    // Get all FK columns
    let fk_columns: Vec<(String, String)> = sqlx::query_as(
        "SELECT DISTINCT
             tc.table_name,
             kcu.column_name
         FROM information_schema.table_constraints tc
         JOIN information_schema.key_column_usage kcu
             ON tc.constraint_name = kcu.constraint_name
             AND tc.table_schema = kcu.table_schema
         WHERE tc.constraint_type = 'FOREIGN KEY'
           AND tc.table_schema = 'public'
         ORDER BY tc.table_name, kcu.column_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert_eq!(
        fk_columns.len(),
        10,
        "Expected ten FK columns, got {:?}",
        fk_columns
    );

    for (table, column) in &fk_columns {
        // Check if an index exists on this column
        let has_index: (bool,) = sqlx::query_as(&format!(
            "SELECT EXISTS (
                SELECT 1
                FROM pg_indexes
                WHERE schemaname = 'public'
                  AND tablename = '{table}'
                  AND indexdef LIKE '%({column})%'
            )"
        ))
        .fetch_one(&pool)
        .await
        .unwrap();

        assert!(has_index.0, "FK column {table}.{column} has no index");
    }
}

/// Every foreign key must cascade on delete; removing a parent removes
/// its children rather than blocking.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_fks_cascade_on_delete(pool: PgPool) {
    let fk_rules: Vec<(String, String, String)> = sqlx::query_as(
        "SELECT
             rc.constraint_name,
             tc.table_name,
             rc.delete_rule
         FROM information_schema.referential_constraints rc
         JOIN information_schema.table_constraints tc
             ON rc.constraint_name = tc.constraint_name
             AND rc.constraint_schema = tc.table_schema
         WHERE rc.constraint_schema = 'public'
         ORDER BY tc.table_name, rc.constraint_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(
        !fk_rules.is_empty(),
        "Expected at least one FK constraint in the schema"
    );

    for (constraint, table, delete_rule) in &fk_rules {
        assert_eq!(
            delete_rule, "CASCADE",
            "FK {constraint} on {table} should be ON DELETE CASCADE, got {delete_rule}"
        );
    }
}

/// Login identifiers are unique; admin display usernames are not.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_expected_unique_constraints(pool: PgPool) {
    let unique_columns: Vec<(String, String)> = sqlx::query_as(
        "SELECT DISTINCT
             tc.table_name,
             kcu.column_name
         FROM information_schema.table_constraints tc
         JOIN information_schema.key_column_usage kcu
             ON tc.constraint_name = kcu.constraint_name
             AND tc.table_schema = kcu.table_schema
         WHERE tc.constraint_type = 'UNIQUE'
           AND tc.table_schema = 'public'
         ORDER BY tc.table_name, kcu.column_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    let expected = [
        ("admins", "email"),
        ("car_owners", "email"),
        ("users", "email"),
        ("users", "username"),
    ];
    for (table, column) in expected {
        assert!(
            unique_columns
                .iter()
                .any(|(t, c)| t == table && c == column),
            "Expected unique constraint on {table}.{column}, found {:?}",
            unique_columns
        );
    }

    assert!(
        !unique_columns
            .iter()
            .any(|(t, c)| t == "admins" && c == "username"),
        "admins.username must not be unique"
    );
}

/// Money columns are NUMERIC(10,2).
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_money_columns_numeric(pool: PgPool) {
    for (table, column) in [("cars", "rental_price"), ("payments", "amount")] {
        let (precision, scale): (i32, i32) = sqlx::query_as(&format!(
            "SELECT numeric_precision::INT4, numeric_scale::INT4
             FROM information_schema.columns
             WHERE table_schema = 'public'
               AND table_name = '{table}'
               AND column_name = '{column}'"
        ))
        .fetch_one(&pool)
        .await
        .unwrap();

        assert_eq!(
            (precision, scale),
            (10, 2),
            "{table}.{column} should be NUMERIC(10,2)"
        );
    }
}
