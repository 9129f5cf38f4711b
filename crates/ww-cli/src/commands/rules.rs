use super::lookup_preset;

pub fn run(preset: Option<&str>) -> Result<(), String> {
    let rules = match preset {
        Some(name) => lookup_preset(name)?,
        None => ww_mechanics::Rules::default(),
    };
    let json = rules.to_json().map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}
