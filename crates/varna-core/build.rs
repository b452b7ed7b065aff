use toml::Table;

const SYMBOLS: &str = "src/symbols/default_symbols.toml";
const CHAKRAS: &str = "src/chakra/default_chakras.toml";

const CHAKRA_NAMES: [&str; 6] = [
    "Muladhara",
    "Svadhisthana",
    "Manipura",
    "Anahata",
    "Vishuddha",
    "Ajna",
];
const EXTRA_SEATS: [&str; 4] = ["Sahasrara", "Ida", "Pingala", "All"];

fn main() {
    println!("cargo:rerun-if-changed={SYMBOLS}");
    println!("cargo:rerun-if-changed={CHAKRAS}");

    let symbols = parse(SYMBOLS, include_str!("src/symbols/default_symbols.toml"));
    for key in ["onsets", "nuclei"] {
        let list = string_list(SYMBOLS, &symbols, key);
        if list.is_empty() {
            panic!("{SYMBOLS}: `{key}` is empty");
        }
    }

    let chakras = parse(CHAKRAS, include_str!("src/chakra/default_chakras.toml"));
    string_list(CHAKRAS, &chakras, "vowels");
    let Some(onsets) = chakras.get("onsets").and_then(|v| v.as_table()) else {
        panic!("{CHAKRAS}: missing [onsets] table");
    };
    for (key, value) in onsets {
        let name = value.as_str().unwrap_or_default();
        if !CHAKRA_NAMES.contains(&name) {
            panic!("{CHAKRAS}: onset {key} maps to unknown chakra {value}");
        }
    }
    let Some(profiles) = chakras.get("profiles").and_then(|v| v.as_table()) else {
        panic!("{CHAKRAS}: missing [profiles] table");
    };
    for name in CHAKRA_NAMES {
        if !profiles.contains_key(name) {
            panic!("{CHAKRAS}: missing [profiles.{name}]");
        }
    }
    let devas = chakras
        .get("devas")
        .and_then(|v| v.as_array())
        .map(Vec::as_slice)
        .unwrap_or_default();
    for deva in devas {
        let seat = deva.get("chakra").and_then(|v| v.as_str()).unwrap_or_default();
        if !CHAKRA_NAMES.contains(&seat) && !EXTRA_SEATS.contains(&seat) {
            panic!("{CHAKRAS}: deva {deva} has unknown seat {seat:?}");
        }
    }
}

fn parse(path: &str, content: &str) -> Table {
    content
        .parse::<Table>()
        .unwrap_or_else(|e| panic!("{path} contains invalid TOML: {e}"))
}

fn string_list<'a>(path: &str, table: &'a Table, key: &str) -> Vec<&'a str> {
    let Some(values) = table.get(key).and_then(|v| v.as_array()) else {
        panic!("{path}: `{key}` must be an array");
    };
    values
        .iter()
        .map(|v| match v.as_str() {
            Some(s) if !s.is_empty() => s,
            _ => panic!("{path}: `{key}` holds a non-string or empty entry"),
        })
        .collect()
}
