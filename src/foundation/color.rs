use serde::{Deserialize, Serialize};

use crate::foundation::core::Rgba8;

impl Rgba8 {
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

impl Serialize for Rgba8 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgba8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            RgbaObj {
                r: f64,
                g: f64,
                b: f64,
                #[serde(default = "one")]
                a: f64,
            },
            Arr(Vec<f64>),
        }

        fn one() -> f64 {
            1.0
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => parse_hex(&s).map_err(serde::de::Error::custom),
            Repr::RgbaObj { r, g, b, a } => Ok(from_unit(r, g, b, a)),
            Repr::Arr(v) => match v.as_slice() {
                [r, g, b] => Ok(from_unit(*r, *g, *b, 1.0)),
                [r, g, b, a] => Ok(from_unit(*r, *g, *b, *a)),
                _ => Err(serde::de::Error::custom(
                    "rgba array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
                )),
            },
        }
    }
}

fn from_unit(r: f64, g: f64, b: f64, a: f64) -> Rgba8 {
    fn to_u8(x: f64) -> u8 {
        (x.clamp(0.0, 1.0) * 255.0).round() as u8
    }
    Rgba8::new(to_u8(r), to_u8(g), to_u8(b), to_u8(a))
}

pub(crate) fn parse_hex(s: &str) -> Result<Rgba8, String> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    if !s.is_ascii() {
        return Err("hex color must be ASCII".to_owned());
    }

    match s.len() {
        6 => Ok(Rgba8::opaque(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
        )),
        8 => Ok(Rgba8::new(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            hex_byte(&s[6..8])?,
        )),
        _ => Err("hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)".to_owned()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
