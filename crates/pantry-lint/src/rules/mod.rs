//! Built-in lint rules.

pub mod duplicate_ingredient;
pub mod duplicate_name;
pub mod empty_ingredients;
pub mod lossy_plural;

pub use duplicate_ingredient::DuplicateIngredientRule;
pub use duplicate_name::DuplicateNameRule;
pub use empty_ingredients::EmptyIngredientsRule;
pub use lossy_plural::LossyPluralRule;
