// pathcross/content/src/lib.rs
//
// Copyright © 2020 The Pathcross Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Path commands, cubic segments, and normalized paths.

#[macro_use]
extern crate bitflags;
#[macro_use]
extern crate log;

pub mod arc;
pub mod command;
pub mod path;
pub mod segment;
