use crate::common::error::{AppError, Resource};

/// Violação de chave estrangeira (23503): algo ainda referencia a linha.
pub(crate) fn is_foreign_key_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .map(|db_err| db_err.is_foreign_key_violation())
        .unwrap_or(false)
}

// ---
// Helper de exclusão: FK vira "em uso", o resto segue como erro de banco.
// ---
pub(crate) fn map_delete_error(e: sqlx::Error, resource: Resource) -> AppError {
    if is_foreign_key_violation(&e) {
        return AppError::ResourceInUse(resource);
    }
    AppError::DatabaseError(e)
}

/// Em escrita, uma FK quebrada significa que a referência não existe.
/// O recurso sai do nome da constraint; constraint desconhecida segue como erro de banco.
pub(crate) fn map_reference_error(e: sqlx::Error, constraints: &[(&str, Resource)]) -> AppError {
    let missing = e
        .as_database_error()
        .filter(|db_err| db_err.is_foreign_key_violation())
        .and_then(|db_err| db_err.constraint())
        .and_then(|name| {
            constraints
                .iter()
                .find(|(constraint, _)| *constraint == name)
                .map(|(_, resource)| *resource)
        });

    match missing {
        Some(resource) => AppError::NotFound(resource),
        None => AppError::DatabaseError(e),
    }
}
