pub mod bank;
pub mod cards;
pub mod sessions;

/// Print a serializable response as pretty JSON.
pub fn output<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
