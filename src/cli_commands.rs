use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use wktgeom::serialization::{parse_wkt, write_wkt};
use wktgeom::{GeomResult, GeometricObject, Geometry};

/// Get the WKT text from the command line argument or from a file
pub fn read_input(text: Option<String>, file: Option<&Path>) -> GeomResult<String> {
    match (text, file) {
        (Some(txt), _) => Ok(txt),
        (None, Some(path)) => {
            log::debug!("Reading WKT from {}", path.display());
            Ok(fs::read_to_string(path)?)
        }
        (None, None) => Err(wktgeom::GeometryError::FormatError(String::from(
            "No input given: pass the WKT text or --file",
        ))),
    }
}

/// One-line summary of the members of a geometry
fn describe(geom: &Geometry) -> String {
    match geom {
        Geometry::Point(pt) => match pt.coords() {
            Some((x, y)) => format!("The point coordinates are: ({x}, {y})"),
            None => String::from("The point is empty"),
        },
        Geometry::LineString(ls) => format!("The linestring contains {} vertices", ls.len()),
        Geometry::MultiPoint(mp) => {
            let empty = mp.points().iter().filter(|p| p.is_empty()).count();
            format!(
                "The multipoint contains {} points ({empty} empty)",
                mp.points().len()
            )
        }
        Geometry::MultiLineString(mls) => {
            let vertices: usize = mls.line_strings().iter().map(|ls| ls.len()).sum();
            format!(
                "The multilinestring contains {} linestrings with {vertices} total vertices",
                mls.line_strings().len()
            )
        }
        Geometry::Polygon(poly) => match poly.outer() {
            Some(outer) => format!(
                "The polygon has {} outer vertices and {} holes",
                outer.len(),
                poly.holes().len()
            ),
            None => String::from("The polygon is empty"),
        },
        Geometry::MultiPolygon(mp) => {
            let holes: usize = mp.polygons().iter().map(|p| p.holes().len()).sum();
            format!(
                "The multipolygon contains {} polygons with {holes} total holes",
                mp.polygons().len()
            )
        }
        Geometry::GeometryCollection(gc) => {
            let kinds: Vec<&str> = gc.geometries().iter().map(|g| g.keyword()).collect();
            format!(
                "The collection contains {} geometries: [{}]",
                kinds.len(),
                kinds.join(", ")
            )
        }
    }
}

/// Parse an input string and print some details about the shape
pub fn parse_show_detail(input: String) -> GeomResult<()> {
    let geom = parse_wkt(&input)?;
    println!("Parsed a Geometry of Type {}!", geom.keyword());
    if geom.is_empty() {
        println!("The geometry is empty");
    } else {
        println!("{}", describe(&geom));
    }
    println!("Canonical WKT: {}", write_wkt(&geom));
    Ok(())
}

/// Parse the given input string, and print or save its canonical WKT text
pub fn normalize(input: String, output_path: Option<&Path>) -> GeomResult<()> {
    let canonical = write_wkt(&parse_wkt(&input)?);
    match output_path {
        None => println!("{canonical}"),
        Some(fp) => {
            let mut file = File::create(fp)?;
            file.write_all(canonical.as_bytes())?;
            log::info!("Geometry saved to file: '{}'", fp.display());
        }
    }
    Ok(())
}
