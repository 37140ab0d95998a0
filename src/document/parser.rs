use crate::models::{Category, FoodRow, ListItem, PlanLine, Unit};

/// Cell values that mark a pipe line as table chrome rather than data.
const HEADER_TOKENS: [&str; 4] = ["alimento", "alimentos", "food", "foods"];

/// First-cell values that look like a food name but belong to summary rows.
const RESERVED_NAMES: [&str; 4] = ["total", "subtotal", "totales", "macros"];

/// Parse plan text into lines, carrying the category context forward.
///
/// The context is the most recent header that normalizes to one of the
/// macro groups (protein/carb/fat); food lines inherit it until the next
/// such header. Other recognized headers (vegetable, dairy) label
/// themselves but leave the context alone.
pub fn parse_lines(text: &str) -> Vec<PlanLine> {
    let mut context = Category::Other;

    text.split('\n')
        .map(|raw| {
            let line = classify(raw, context);
            if let PlanLine::Header {
                category: Some(cat),
                ..
            } = &line
            {
                if cat.is_macro_group() {
                    context = *cat;
                }
            }
            line
        })
        .collect()
}

/// Classify one line. First match wins: header, table structure, food
/// table row, food list item, free text.
fn classify(raw: &str, context: Category) -> PlanLine {
    let trimmed = raw.trim();

    if let Some((level, text)) = parse_header(trimmed) {
        let cat = Category::normalize(&text);
        let category = (cat != Category::Other).then_some(cat);
        return PlanLine::Header {
            level,
            text,
            category,
            raw: raw.to_string(),
        };
    }

    if trimmed.starts_with('|') {
        let cells = split_cells(trimmed);

        if is_structure(&cells) {
            return PlanLine::TableStructure {
                raw: raw.to_string(),
            };
        }

        if let Some(row) = parse_food_row(cells, context) {
            return PlanLine::FoodRow {
                row,
                raw: raw.to_string(),
            };
        }

        return PlanLine::FreeText {
            raw: raw.to_string(),
        };
    }

    if let Some(item) = parse_list_item(raw, context) {
        return PlanLine::ListItem {
            item,
            raw: raw.to_string(),
        };
    }

    PlanLine::FreeText {
        raw: raw.to_string(),
    }
}

fn parse_header(trimmed: &str) -> Option<(usize, String)> {
    if !trimmed.starts_with('#') {
        return None;
    }
    let level = trimmed.chars().take_while(|c| *c == '#').count();
    let text = trimmed[level..].trim().to_string();
    Some((level, text))
}

/// Split a pipe line into trimmed data cells, outer pipes stripped.
fn split_cells(trimmed: &str) -> Vec<String> {
    let inner = trimmed.strip_prefix('|').unwrap_or(trimmed);
    let inner = inner.strip_suffix('|').unwrap_or(inner);
    inner.split('|').map(|c| c.trim().to_string()).collect()
}

/// Table chrome: a markdown divider row or a header row naming the food
/// column.
fn is_structure(cells: &[String]) -> bool {
    if is_divider(cells) {
        return true;
    }
    cells
        .iter()
        .any(|c| HEADER_TOKENS.contains(&c.to_lowercase().as_str()))
}

fn is_divider(cells: &[String]) -> bool {
    let mut has_dash = false;
    for cell in cells {
        if cell.is_empty() {
            continue;
        }
        if !cell.chars().all(|c| c == '-' || c == ':' || c.is_whitespace()) {
            return false;
        }
        if cell.contains('-') {
            has_dash = true;
        }
    }
    has_dash
}

/// Positional food row: first cell a name, second cell a quantity with an
/// optional unit. Anything that misses the pattern degrades to free text.
fn parse_food_row(cells: Vec<String>, context: Category) -> Option<FoodRow> {
    if cells.len() < 2 {
        return None;
    }

    let name = cells[0].clone();
    if name.is_empty() || RESERVED_NAMES.contains(&name.to_lowercase().as_str()) {
        return None;
    }
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }

    let (quantity, unit) = parse_quantity_cell(&cells[1])?;

    Some(FoodRow {
        name,
        quantity,
        unit,
        category: context,
        cells,
    })
}

/// A quantity cell must parse completely; a missing unit means grams.
fn parse_quantity_cell(cell: &str) -> Option<(f64, Unit)> {
    let (quantity, unit, rest) = split_quantity(cell)?;
    if !rest.is_empty() {
        return None;
    }
    Some((quantity, unit.unwrap_or(Unit::Grams)))
}

/// `- **<qty><unit> <name>**<extra>` with optional indent. The unit is
/// required here; after a portions unit a `de` connective is dropped so
/// "2 Porciones de Proteína" names "Proteína".
fn parse_list_item(raw: &str, context: Category) -> Option<ListItem> {
    let stripped = raw.trim_start();
    let indent = &raw[..raw.len() - stripped.len()];

    let body = stripped.strip_prefix("- **")?;
    let close = body.find("**")?;
    let inner = &body[..close];
    let extra = &body[close + 2..];

    let (quantity, unit, name_part) = split_quantity(inner)?;
    let unit = unit?;

    let name = if unit == Unit::Portions {
        strip_connective(name_part)
    } else {
        name_part
    };
    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    Some(ListItem {
        name: name.to_string(),
        quantity,
        unit,
        category: context,
        indent: indent.to_string(),
        extra: extra.to_string(),
    })
}

/// Split a leading number (decimal comma tolerated) and an optional unit
/// token off a string; returns the remainder trimmed at the start.
fn split_quantity(s: &str) -> Option<(f64, Option<Unit>, &str)> {
    let s = s.trim();
    let digits_end = s
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == ','))
        .unwrap_or(s.len());
    if digits_end == 0 {
        return None;
    }

    let quantity: f64 = s[..digits_end].replace(',', ".").parse().ok()?;

    let rest = s[digits_end..].trim_start();
    let word_end = rest
        .find(char::is_whitespace)
        .unwrap_or(rest.len());

    if let Some(unit) = Unit::parse_token(&rest[..word_end]) {
        Some((quantity, Some(unit), rest[word_end..].trim_start()))
    } else {
        Some((quantity, None, rest))
    }
}

fn strip_connective(s: &str) -> &str {
    let t = s.trim_start();
    for prefix in ["de ", "De ", "DE "] {
        if let Some(rest) = t.strip_prefix(prefix) {
            return rest;
        }
    }
    t
}
