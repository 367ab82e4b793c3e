//! Schema bootstrap and sample data for the books table

use sqlx::PgPool;

use crate::models::seed_books;

/// Create the books table if it does not exist.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring books schema");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS books (
            id INTEGER GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY,
            title VARCHAR(100) NOT NULL,
            author VARCHAR(50) NOT NULL,
            isbn TEXT NOT NULL,
            is_available BOOLEAN NOT NULL DEFAULT TRUE
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Insert the sample rows, leaving existing rows with the same ids untouched.
///
/// The identity sequence is moved past the highest id afterwards, since
/// explicit ids do not advance it.
pub async fn seed(pool: &PgPool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    let mut inserted = 0;
    for book in seed_books() {
        let result = sqlx::query(
            r#"
            INSERT INTO books (id, title, author, isbn, is_available)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(book.id)
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.isbn)
        .bind(book.is_available)
        .execute(&mut *tx)
        .await?;
        inserted += result.rows_affected();
    }

    sqlx::query(
        r#"
        SELECT setval(
            pg_get_serial_sequence('books', 'id'),
            (SELECT COALESCE(MAX(id), 0) + 1 FROM books),
            false
        )
        "#,
    )
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    tracing::info!(inserted, "Seeded sample books");
    Ok(())
}
