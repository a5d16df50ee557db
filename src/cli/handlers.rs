use std::{
    fs,
    io::{IsTerminal, Write, stdout},
    path::Path,
};

use crate::{
    core::{
        chart::Chart,
        color::{PALETTE, colorize},
        data::read_csv_from_path,
        description::{DocumentFormat, Json, Toml},
        error::GraphError,
    },
    render::Renderer,
};

use super::parse::{CsvArgs, DocArgs, OutputArgs};

/// Colour follows stdout being a terminal whatever the width source.
fn renderer(out: OutputArgs, stdout_is_terminal: bool) -> Renderer {
    let r = match out.width {
        Some(w) => Renderer::fixed(w),
        None => Renderer::terminal(),
    };
    r.color(stdout_is_terminal && !out.no_color)
}

fn emit(chart: &Chart, out: OutputArgs) -> Result<(), GraphError> {
    let term = stdout();
    let colored = term.is_terminal();
    renderer(out, colored).render_to(chart, &mut term.lock())?;
    Ok(())
}

fn read_document(path: &Path) -> Result<String, GraphError> {
    fs::read_to_string(path).map_err(|source| GraphError::ReadDocument {
        path: path.display().to_string(),
        source,
    })
}

fn is_toml(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}

fn load<F: DocumentFormat>(config: &str, data: &str) -> Result<Chart, GraphError> {
    Ok(Chart::from_documents::<F>(config, data)?)
}

/// Both documents are decoded in the data document's format.
pub fn doc(a: &DocArgs, out: OutputArgs) -> Result<(), GraphError> {
    let toml = is_toml(&a.data);
    let data = read_document(&a.data)?;
    let config = match &a.config {
        Some(path) => read_document(path)?,
        // an empty table in either format
        None if toml => String::new(),
        None => "{}".to_owned(),
    };
    tracing::debug!(data = %a.data.display(), toml, "loading chart documents");

    let chart = if toml {
        load::<Toml>(&config, &data)?
    } else {
        load::<Json>(&config, &data)?
    };
    emit(&chart, out)
}

pub fn csv(a: CsvArgs, out: OutputArgs) -> Result<(), GraphError> {
    let entries = read_csv_from_path(&a.file)?;

    let mut b = Chart::builder()
        .show_values(a.show_values)
        .entries(entries);
    if let Some(t) = a.title {
        b = b.title(t);
    }
    if let Some(p) = a.percwidth {
        b = b.perc_width(p);
    }
    let chart = b.build()?;
    emit(&chart, out)
}

/// Pretty-print the palette with the tags that select each colour.
pub fn colors() -> Result<(), GraphError> {
    let mut term = stdout().lock();
    writeln!(term, "\nPossible colors:")?;
    for (i, (tag, name, _)) in PALETTE.iter().enumerate() {
        writeln!(term, "{}  {name}", colorize(*tag, &format!("{:>2}", i + 1)))?;
    }
    writeln!(term, "Anything else renders uncoloured.\n")?;
    Ok(())
}

const FRUIT_CONFIG: &str = r#"{
    "title":      "Fruits example",
    "percwidth":  50,
    "showvalues": false
}"#;

const FRUIT_DATA: &str = r#"[
    { "label": "cherries",    "value": 1, "color": "1" },
    { "label": "apples",      "value": 3, "color": "2" },
    { "label": "bananas",     "value": 2, "color": "3" },
    { "label": "blueberries", "value": 5, "color": "4" }
]"#;

/// Fruits from a description, world cities built by hand.
pub fn fruit_chart() -> Result<Chart, GraphError> {
    Ok(Chart::from_description(FRUIT_CONFIG, FRUIT_DATA)?)
}

pub fn population_chart() -> Result<Chart, GraphError> {
    let mut b = Chart::new();
    b.set_title("Population example");
    b.set_perc_width(90)?;
    b.set_show_values(true);

    b.add("Tokyo", 37_977_000.0);
    b.add("Jakarta", 34_540_000.0);
    b.add("Delhi", 29_617_000.0);
    b.add("Mumbai", 23_355_000.0);
    b.add("Manila", 23_088_000.0);
    b.add("Shanghai", 22_120_000.0);
    b.add("Sao Paulo", 22_046_000.0);
    b.add("Seoul", 21_794_000.0);
    b.add("Mexico City", 20_996_000.0);
    Ok(b)
}

pub fn examples(out: OutputArgs) -> Result<(), GraphError> {
    emit(&fruit_chart()?, out)?;
    writeln!(stdout())?;
    emit(&population_chart()?, out)
}
