//! Simulation config - grid dimensions plus the material palette
//!
//! Two sources:
//! - line-oriented text (`key:value` header, then blank-line separated material blocks)
//! - JSON, for hosts that already speak the content-bundle style
//!
//! Text format:
//! ```text
//! h:120
//! w:160
//! s:4
//! matter
//! n:sand
//! t:gr
//! d:3
//! c:220,190,90
//!
//! n:water
//! t:l
//! d:2
//! c:40,90,220
//! ```

use serde::{Deserialize, Serialize};

use super::material::{Category, Color, MaterialTraits};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimConfig {
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    /// Render-only scale factor, passed through to the host
    #[serde(default)]
    pub pixel_size: u32,
    #[serde(default)]
    pub materials: Vec<MaterialTraits>,
}

impl SimConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }

    /// Parse the line-oriented config format
    pub fn parse(text: &str) -> Result<Self, String> {
        let mut config = SimConfig::default();
        let mut in_materials = false;
        let mut block: Vec<(usize, &str)> = Vec::new();

        for (i, raw) in text.lines().enumerate() {
            let line_no = i + 1;
            let line = raw.trim();

            if !in_materials {
                if line.is_empty() {
                    continue;
                }
                let (key, value) = split_key_value(line);
                if key == "matter" {
                    in_materials = true;
                    continue;
                }
                if key == "n" {
                    // No explicit marker: the first name line opens the section
                    in_materials = true;
                    block.push((line_no, line));
                    continue;
                }
                match key {
                    "h" | "height" => config.height = parse_int(value, line_no, key)?,
                    "w" | "width" => config.width = parse_int(value, line_no, key)?,
                    "s" | "pixelSize" => config.pixel_size = parse_int(value, line_no, key)?,
                    _ => console_warn!("config line {}: unknown header key '{}'", line_no, key),
                }
                continue;
            }

            if line.is_empty() {
                if !block.is_empty() {
                    config.materials.push(parse_material(&block)?);
                    block.clear();
                }
                continue;
            }
            block.push((line_no, line));
        }

        if !block.is_empty() {
            config.materials.push(parse_material(&block)?);
        }

        Ok(config)
    }
}

fn split_key_value(line: &str) -> (&str, &str) {
    match line.split_once(':') {
        Some((k, v)) => (k.trim(), v.trim()),
        None => (line, ""),
    }
}

fn parse_int<T: std::str::FromStr>(value: &str, line_no: usize, key: &str) -> Result<T, String> {
    value
        .parse::<T>()
        .map_err(|_| format!("config line {}: '{}' is not a valid number for '{}'", line_no, value, key))
}

fn parse_color(value: &str, line_no: usize) -> Result<Color, String> {
    let parts: Vec<&str> = value.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!(
            "config line {}: color needs three components, got '{}'",
            line_no, value
        ));
    }
    let mut rgb = [0u8; 3];
    for (slot, part) in rgb.iter_mut().zip(parts) {
        *slot = part.parse::<u8>().map_err(|_| {
            format!("config line {}: color component '{}' is not in 0..=255", line_no, part)
        })?;
    }
    Ok(Color(rgb))
}

fn parse_material(block: &[(usize, &str)]) -> Result<MaterialTraits, String> {
    let mut name: Option<String> = None;
    let mut category = Category::Grain;
    let mut density = 0;
    let mut color = Color::default();

    for &(line_no, line) in block {
        let Some((key, value)) = line.split_once(':') else {
            return Err(format!("config line {}: expected 'key:value', got '{}'", line_no, line));
        };
        let value = value.trim();
        match key.trim() {
            "n" => name = Some(value.to_string()),
            "t" => category = Category::from_code(value),
            "d" => density = parse_int(value, line_no, "d")?,
            "c" => color = parse_color(value, line_no)?,
            other => console_warn!("config line {}: unknown material key '{}'", line_no, other),
        }
    }

    let first_line = block.first().map(|&(n, _)| n).unwrap_or(0);
    let name = name.ok_or_else(|| format!("config line {}: material block has no 'n' entry", first_line))?;

    Ok(MaterialTraits {
        name,
        category,
        density,
        color,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "h:20\nw:30\ns:4\nmatter\nn:sand\nt:gr\nd:3\nc:220,190,90\n\nn:water\nt:l\nd:2\nc:40,90,220\n\nn:wall\nt:s\nd:100\nc:90,90,90\n";

    #[test]
    fn parses_header_and_blocks() {
        let cfg = SimConfig::parse(SAMPLE).unwrap();
        assert_eq!((cfg.width, cfg.height, cfg.pixel_size), (30, 20, 4));
        assert_eq!(cfg.materials.len(), 3);
        assert_eq!(cfg.materials[1].name, "water");
        assert_eq!(cfg.materials[1].category, Category::Liquid);
        assert_eq!(cfg.materials[2].color, Color::rgb(90, 90, 90));
    }

    #[test]
    fn last_block_without_trailing_blank_line() {
        let cfg = SimConfig::parse("w:2\nh:2\nmatter\nn:steam\nt:g\nd:1\nc:1,1,1").unwrap();
        assert_eq!(cfg.materials.len(), 1);
        assert_eq!(cfg.materials[0].category, Category::Gas);
    }

    #[test]
    fn name_line_opens_material_section_and_crlf_is_tolerated() {
        let cfg = SimConfig::parse("height:5\r\nwidth:6\r\n\r\nn:dust\r\nt:zz\r\nd:1\r\n").unwrap();
        assert_eq!((cfg.width, cfg.height), (6, 5));
        assert_eq!(cfg.materials[0].name, "dust");
        // Unknown codes default to grain
        assert_eq!(cfg.materials[0].category, Category::Grain);
    }

    #[test]
    fn header_only_gives_empty_palette() {
        let cfg = SimConfig::parse("h:3\nw:3\n").unwrap();
        assert!(cfg.materials.is_empty());
    }

    #[test]
    fn malformed_numbers_report_the_line() {
        let err = SimConfig::parse("h:abc\n").unwrap_err();
        assert!(err.contains("line 1"), "{}", err);

        let err = SimConfig::parse("matter\nn:sand\nd:heavy\n").unwrap_err();
        assert!(err.contains("line 3"), "{}", err);
    }

    #[test]
    fn bad_colors_are_rejected() {
        assert!(SimConfig::parse("matter\nn:a\nc:1,2\n").is_err());
        assert!(SimConfig::parse("matter\nn:a\nc:1,2,300\n").is_err());
    }

    #[test]
    fn block_without_name_is_rejected() {
        let err = SimConfig::parse("matter\nt:l\nd:2\n").unwrap_err();
        assert!(err.contains("no 'n'"), "{}", err);
    }

    #[test]
    fn json_form() {
        let json = r#"{
            "width": 8, "height": 4, "pixelSize": 2,
            "materials": [
                { "name": "sand", "category": "grain", "density": 3, "color": [200, 180, 90] },
                { "name": "smoke", "category": "gas", "density": 1, "color": [60, 60, 60] }
            ]
        }"#;
        let cfg = SimConfig::from_json(json).unwrap();
        assert_eq!(cfg.pixel_size, 2);
        assert_eq!(cfg.materials[1].category, Category::Gas);
        assert!(SimConfig::from_json("{ not json").is_err());
    }
}
