use validator::Validate;

use crate::server::error::AppError;

/// Runs the `validator` rules of a request DTO.
///
/// # Arguments
/// - `dto` - Deserialized request body or query
///
/// # Returns
/// - `Ok(T)` - The DTO, unchanged
/// - `Err(AppError::Validation)` - At least one field violated its rules
pub fn validated<T: Validate>(dto: T) -> Result<T, AppError> {
    dto.validate()?;
    Ok(dto)
}
