//! Japanese label romanization
//!
//! Maps the Japanese vocabulary of Zeiss-style reports onto ASCII labels
//! for downstream tools that cannot handle CJK text. Replacement runs
//! longest-match-first so compound terms (基準円) win over their parts
//! (基準, 円). Characters with no mapping degrade to `X`.

use once_cell::sync::Lazy;
use regex::Regex;

/// Term replacements, ordered longest-first
const REPLACEMENTS: &[(&str, &str)] = &[
    ("基本座標系", "Basic_Coordinate_System"),
    ("座標系", "Coordinate_System"),
    ("基準円", "Reference_Circle"),
    ("最小二乗法", "Least_Squares"),
    ("ﾃﾞｰﾀﾑ", "Datum"),
    ("基準", "Reference"),
    ("測定", "Measurement"),
    ("点数", "Point_Count"),
    ("直線", "Line"),
    ("平面", "Plane"),
    ("内側", "Inside"),
    ("外側", "Outside"),
    ("公差", "Tolerance"),
    ("偏差", "Deviation"),
    ("形状", "Form"),
    ("円", "Circle"),
    ("線", "Line"),
    ("値", "Value"),
    ("軸", "Axis"),
    ("１", "1"),
    ("２", "2"),
    ("３", "3"),
    ("４", "4"),
    ("５", "5"),
    ("６", "6"),
    ("７", "7"),
    ("８", "8"),
    ("９", "9"),
    ("０", "0"),
];

static REFERENCE_CIRCLE_INDEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Reference_Circle(\d+)").unwrap());
static CIRCLE_INDEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"Circle(\d+)").unwrap());
static PLANE_INDEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"Plane(\d+)").unwrap());
static LINE_INDEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"Line(\d+)").unwrap());
static AXIS_VALUE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([XYZ])-Value_").unwrap());

/// Romanize a report label into ASCII
pub fn romanize(text: &str) -> String {
    let mut out = text.to_string();

    for (japanese, english) in REPLACEMENTS {
        out = out.replace(japanese, english);
    }

    // Separate element indices: Circle1 -> Circle_1
    out = REFERENCE_CIRCLE_INDEX
        .replace_all(&out, "Reference_Circle_$1")
        .into_owned();
    out = CIRCLE_INDEX.replace_all(&out, "Circle_$1").into_owned();
    out = PLANE_INDEX.replace_all(&out, "Plane_$1").into_owned();
    out = LINE_INDEX.replace_all(&out, "Line_$1").into_owned();
    // X-Value_... -> X_Value_...
    out = AXIS_VALUE.replace_all(&out, "${1}_Value_").into_owned();

    // Anything still non-ASCII has no mapping
    out.chars()
        .map(|c| if c.is_ascii() { c } else { 'X' })
        .collect()
}
