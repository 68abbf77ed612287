//! SQL helper functions shared by the persistence adapters.

diesel::define_sql_function! {
    /// SQLite's built-in `lower`, for case-insensitive name lookups.
    fn lower(x: diesel::sql_types::Text) -> diesel::sql_types::Text;
}
