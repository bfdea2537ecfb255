// pathcross/utils/path-intersect/src/main.rs
//
// Copyright © 2020 The Pathcross Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Prints the intersections of SVG paths given on the command line.

#[macro_use]
extern crate log;

use clap::{App, Arg, ArgMatches};
use pathcross_intersect::{GridIndex, IndexSession, IntersectOptions, Intersection, PathId};
use pathcross_intersect::{count_path_intersections, find_path_intersections};
use std::error::Error;
use std::process;

const DEFAULT_CELL_SIZE: f64 = 64.0;

fn main() {
    env_logger::init();

    let matches =
        App::new("path-intersect").arg(Arg::with_name("count").short("c")
                                                              .long("count")
                                                              .help("Print only the number of \
                                                                     intersections"))
                                  .arg(Arg::with_name("tolerance").short("t")
                                                                  .long("tolerance")
                                                                  .value_name("T")
                                                                  .takes_value(true)
                                                                  .help("Distance under which \
                                                                         results are merged"))
                                  .arg(Arg::with_name("grid").short("g")
                                                             .long("grid")
                                                             .value_name("CELL")
                                                             .takes_value(true)
                                                             .help("Index the paths in a grid \
                                                                    with CELL-sized cells"))
                                  .arg(Arg::with_name("PATH").help("SVG path data")
                                                             .required(true)
                                                             .multiple(true)
                                                             .min_values(2))
                                  .get_matches();

    if let Err(error) = run(&matches) {
        eprintln!("path-intersect: {}", error);
        process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let paths: Vec<&str> = matches.values_of("PATH").map(|values| values.collect())
                                                    .unwrap_or_else(Vec::new);
    if paths.len() < 2 {
        return Err("at least two paths are needed".into());
    }

    let mut options = IntersectOptions::default();
    if let Some(tolerance) = matches.value_of("tolerance") {
        options = options.tolerance(parse_number("tolerance", tolerance)?);
    }
    let count_only = matches.is_present("count");

    let cell_size = match matches.value_of("grid") {
        Some(cell_size) => Some(parse_number("grid", cell_size)?),
        None if paths.len() > 2 => Some(DEFAULT_CELL_SIZE),
        None => None,
    };

    match cell_size {
        None => run_direct(paths[0], paths[1], &options, count_only),
        Some(cell_size) => run_indexed(&paths, cell_size, &options, count_only),
    }
}

fn run_direct(path1: &str, path2: &str, options: &IntersectOptions, count_only: bool)
              -> Result<(), Box<dyn Error>> {
    if count_only {
        println!("{}", count_path_intersections(path1, path2, options)?);
        return Ok(());
    }
    for intersection in find_path_intersections(path1, path2, options)? {
        println!("{}", format_intersection(&intersection));
    }
    Ok(())
}

fn run_indexed(paths: &[&str], cell_size: f64, options: &IntersectOptions, count_only: bool)
               -> Result<(), Box<dyn Error>> {
    let mut session = IndexSession::new(GridIndex::new(cell_size));
    let mut ids: Vec<PathId> = Vec::with_capacity(paths.len());
    for (position, path) in paths.iter().enumerate() {
        let id = session.index_path(*path).map_err(|error| {
            format!("path {}: {}", position + 1, error)
        })?;
        ids.push(id);
    }
    info!("indexed {} paths", ids.len());

    if count_only {
        println!("{}", session.count_intersections(&ids, options)?);
        return Ok(());
    }
    for result in session.find_intersections(&ids, options)? {
        println!("{} {} {}",
                 result.path_id1,
                 result.path_id2,
                 format_intersection(&result.intersection));
    }
    Ok(())
}

fn format_intersection(intersection: &Intersection) -> String {
    format!("{} {} {} {} {} {}",
            intersection.x,
            intersection.y,
            intersection.t1,
            intersection.t2,
            intersection.segment1,
            intersection.segment2)
}

fn parse_number(option: &str, value: &str) -> Result<f64, Box<dyn Error>> {
    match value.parse::<f64>() {
        Ok(number) if number.is_finite() => Ok(number),
        _ => Err(format!("--{} expects a number, found {:?}", option, value).into()),
    }
}
