// pathcross/svg/tests/normalize.rs
//
// Copyright © 2020 The Pathcross Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#[macro_use]
extern crate quickcheck;

use pathcross_svg::{parse, parse_commands, parse_str, tokenize};
use std::borrow::Cow;

const LETTERS: &[char] = &[
    'M', 'm', 'L', 'l', 'H', 'h', 'V', 'v', 'C', 'c', 'S', 's', 'Q', 'q', 'T', 't', 'A', 'a', 'Z',
    'z',
];

type Group = (u8, i8, i8, i8, i8, i8, i8);

/// Builds valid path text from arbitrary small-integer groups.
fn path_text(groups: &[Group]) -> String {
    let mut text = String::from("M0,0");
    for &(choice, a, b, c, d, e, f) in groups {
        let letter = LETTERS[choice as usize % LETTERS.len()];
        let params = match letter.to_ascii_uppercase() {
            'M' | 'L' | 'T' => format!("{},{}", a, b),
            'H' | 'V' => format!("{}", a),
            'C' => format!("{},{} {},{} {},{}", a, b, c, d, e, f),
            'S' | 'Q' => format!("{},{} {},{}", a, b, c, d),
            'A' => {
                format!("{},{} {} {}{} {},{}",
                        (a as i16).abs(),
                        (b as i16).abs(),
                        c,
                        choice & 1,
                        (choice >> 1) & 1,
                        e,
                        f)
            }
            _ => String::new(),
        };
        text.push(' ');
        text.push(letter);
        text.push_str(&params);
    }
    text
}

quickcheck! {
    fn normalized_commands_reparse_identically(groups: Vec<Group>) -> bool {
        let path = parse_str(&path_text(&groups)).unwrap();
        parse_commands(&path.to_commands()).unwrap() == path
    }

    fn normalized_input_passes_through(groups: Vec<Group>) -> bool {
        let path = parse_str(&path_text(&groups)).unwrap();
        match parse(&path).unwrap() {
            Cow::Borrowed(borrowed) => *borrowed == path,
            Cow::Owned(_) => false,
        }
    }

    fn text_and_records_agree(groups: Vec<Group>) -> bool {
        let text = path_text(&groups);
        let commands = tokenize(&text).unwrap();
        commands.len() == groups.len() + 1 &&
            parse_commands(&commands).unwrap() == parse_str(&text).unwrap()
    }

    fn segments_are_contiguous(groups: Vec<Group>) -> bool {
        let path = parse_str(&path_text(&groups)).unwrap();
        let mut previous_end = None;
        for (index, curve) in path.curves().iter().enumerate() {
            match curve.as_segment() {
                None => previous_end = Some(curve.end_point()),
                Some(segment) => {
                    if previous_end != Some(segment.from()) {
                        return false;
                    }
                    previous_end = Some(segment.to());
                    if path.segment(index) != Some(segment) {
                        return false;
                    }
                }
            }
        }
        true
    }
}

#[test]
fn test_reference_paths_parse() {
    let paths = [
        "M0,0L100,100",
        "M0,100L100,0",
        "M80,140L100,140",
        "M100,100l80,0a10,10,0,0,1,10,10l0,60a10,10,0,0,1,-10,10l-80,0a10,10,0,0,1,-10,-10l0,-60\
         a10,10,0,0,1,10,-10z",
        "M150,150m0,-18a18,18,0,1,1,0,36a18,18,0,1,1,0,-36z",
        "M413,172l25,25l-25,25l-25,-25z",
    ];
    for path in &paths {
        assert!(parse_str(path).is_ok(), "failed to parse {}", path);
    }
    let rounded = parse_str(paths[3]).unwrap();
    assert_eq!(rounded.segment_count(), 9);
    let coords = rounded.segment(7).unwrap().to_coords();
    assert_eq!((coords[0], coords[1], coords[6], coords[7]), (90.0, 170.0, 90.0, 110.0));
}
