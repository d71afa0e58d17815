use crate::utils::error::{AppError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_name(field_name: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Name cannot be empty".to_string(),
        });
    }

    if name.contains('\0') {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Name contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_people<'a, I>(field_prefix: &str, names: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    for (index, name) in names.into_iter().enumerate() {
        validate_name(&format!("{}[{}].name", field_prefix, index), name)?;
    }
    Ok(())
}
