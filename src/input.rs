use std::{fs, path::Path};

use anyhow::{Context, Result};
use svg::node::element::tag;
use svg::parser::Event;

/// Path strings in `file`: the `d` attribute of every `<path>` of an svg
/// document, or one path per line for anything else.
pub fn load_paths(file: &Path) -> Result<Vec<String>> {
    let is_svg = file.extension()
	.map_or(false, |ext| ext.eq_ignore_ascii_case("svg"));

    if is_svg {
	svg_paths(file)
    } else {
	let content = fs::read_to_string(file)
	    .with_context(|| format!("could not read {}", file.display()))?;
	Ok(path_lines(&content))
    }
}

/// Skips blank lines and `#` comments.
pub fn path_lines(content: &str) -> Vec<String> {
    content.lines()
	.map(str::trim)
	.filter(|line| !line.is_empty() && !line.starts_with('#'))
	.map(String::from)
	.collect()
}

fn svg_paths(file: &Path) -> Result<Vec<String>> {
    let mut content = String::new();
    let events = svg::open(file, &mut content)
	.with_context(|| format!("could not open svg document {}", file.display()))?;

    let mut paths = Vec::new();
    for event in events {
	match event {
	    Event::Tag(tag::Path, kind, attributes) if kind != tag::Type::End => match attributes.get("d") {
		Some(data) => paths.push(data.to_string()),
		None => log::warn!("{}: <path> without a d attribute", file.display()),
	    },
	    _ => (),
	}
    }

    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_lines_skip_comments_and_blanks() {
	let content = "# heart\nM 0 0 L 1 1\n\n   \n  m 1 1 2 2  \n#M 5 5\n";
	assert_eq!(path_lines(content), vec!["M 0 0 L 1 1", "m 1 1 2 2"]);
    }

    #[test]
    fn svg_documents() -> Result<()> {
	let file = std::env::temp_dir().join(format!("pathdump-{}.svg", std::process::id()));
	fs::write(&file, r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 10 10">
  <g transform="translate(1 1)">
    <path d="M 1 1 L 5 5 z"/>
    <rect x="0" y="0" width="1" height="1"/>
    <path id="no-data"/>
    <path d="m 2 2 h 3"></path>
  </g>
</svg>
"#)?;

	let paths = load_paths(&file);
	fs::remove_file(&file)?;
	assert_eq!(paths?, vec!["M 1 1 L 5 5 z", "m 2 2 h 3"]);
	Ok(())
    }
}
