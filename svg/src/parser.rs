// pathcross/svg/src/parser.rs
//
// Copyright © 2020 The Pathcross Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Reduces command records to a normalized path of absolute cubic segments.

use crate::error::ParseError;
use pathcross_content::arc::{ArcDirection, SvgArc};
use pathcross_content::command::{CommandKind, PathCommand};
use pathcross_content::path::NormalizedPath;
use pathcross_content::segment::Segment;
use pathcross_geometry::line_segment::LineSegment2D;
use pathcross_geometry::vector::{Vector2D, vec2d};

/// The last control point of the previous segment, kept for the smooth curve commands.
#[derive(Clone, Copy, Debug)]
enum LastControl {
    None,
    Cubic(Vector2D),
    Quadratic(Vector2D),
}

pub(crate) struct Normalizer {
    path: NormalizedPath,
    current: Vector2D,
    subpath_start: Vector2D,
    last_control: LastControl,
}

impl Normalizer {
    pub(crate) fn new() -> Normalizer {
        Normalizer {
            path: NormalizedPath::new(),
            current: Vector2D::zero(),
            subpath_start: Vector2D::zero(),
            last_control: LastControl::None,
        }
    }

    /// Normalizes a sequence of command records. Each record is paired with the position that
    /// errors should report for it.
    pub(crate) fn normalize<'a, I>(mut self, commands: I) -> Result<NormalizedPath, ParseError>
                                   where I: IntoIterator<Item = (&'a PathCommand, usize)> {
        for (command, position) in commands {
            self.command(command, position)?;
        }
        Ok(self.path)
    }

    fn command(&mut self, command: &PathCommand, position: usize) -> Result<(), ParseError> {
        let letter = command.letter();
        let kind = match command.kind() {
            Some(kind) => kind,
            None => return Err(ParseError::UnknownCommand { command: letter, position }),
        };
        if self.path.is_empty() && kind != CommandKind::MoveTo {
            return Err(ParseError::MissingMoveTo { command: letter, position });
        }

        let params = command.params();
        if params.iter().any(|param| !param.is_finite()) {
            return Err(ParseError::NonFiniteParameter { command: letter });
        }

        let arity = kind.arity();
        if arity == 0 {
            if !params.is_empty() {
                return Err(ParseError::UnexpectedNumber { position });
            }
            trace!("normalizing {}", command);
            self.close_path();
            return Ok(());
        }
        if params.is_empty() || params.len() % arity != 0 {
            return Err(ParseError::MissingParameters {
                command: letter,
                expected: arity,
                found: params.len() % arity,
                position,
            });
        }

        trace!("normalizing {}", command);
        let relative = command.is_relative();
        for (group_index, group) in params.chunks(arity).enumerate() {
            // Extra coordinate pairs after a move are implicit lines.
            let kind = if kind == CommandKind::MoveTo && group_index > 0 {
                CommandKind::LineTo
            } else {
                kind
            };
            self.group(kind, relative, group, position)?;
        }
        Ok(())
    }

    fn group(&mut self, kind: CommandKind, relative: bool, params: &[f64], position: usize)
             -> Result<(), ParseError> {
        let origin = if relative { self.current } else { Vector2D::zero() };
        let point = |x: f64, y: f64| vec2d(x, y) + origin;

        match kind {
            CommandKind::MoveTo => {
                let to = point(params[0], params[1]);
                self.path.push_move(to);
                self.current = to;
                self.subpath_start = to;
                self.last_control = LastControl::None;
            }
            CommandKind::LineTo => self.line_to(point(params[0], params[1])),
            CommandKind::HorizontalLineTo => {
                let x = if relative { self.current.x() + params[0] } else { params[0] };
                self.line_to(vec2d(x, self.current.y()));
            }
            CommandKind::VerticalLineTo => {
                let y = if relative { self.current.y() + params[0] } else { params[0] };
                self.line_to(vec2d(self.current.x(), y));
            }
            CommandKind::CurveTo => {
                self.cubic_to(point(params[0], params[1]),
                              point(params[2], params[3]),
                              point(params[4], params[5]));
            }
            CommandKind::SmoothCurveTo => {
                let ctrl0 = match self.last_control {
                    LastControl::Cubic(ctrl) => ctrl.reflect_through(self.current),
                    _ => self.current,
                };
                self.cubic_to(ctrl0, point(params[0], params[1]), point(params[2], params[3]));
            }
            CommandKind::QuadraticCurveTo => {
                self.quadratic_to(point(params[0], params[1]), point(params[2], params[3]));
            }
            CommandKind::SmoothQuadraticCurveTo => {
                let ctrl = match self.last_control {
                    LastControl::Quadratic(ctrl) => ctrl.reflect_through(self.current),
                    _ => self.current,
                };
                self.quadratic_to(ctrl, point(params[0], params[1]));
            }
            CommandKind::Arc => {
                let large_arc = flag(params[3], position)?;
                let sweep = flag(params[4], position)?;
                let arc = SvgArc {
                    from: self.current,
                    to: point(params[5], params[6]),
                    radii: vec2d(params[0], params[1]),
                    x_axis_rotation: params[2],
                    large_arc,
                    direction: ArcDirection::from_sweep_flag(sweep),
                };
                for segment in arc.to_cubics() {
                    self.path.push_segment(segment);
                }
                self.current = arc.to;
                self.last_control = LastControl::None;
            }
            CommandKind::ClosePath => self.close_path(),
        }
        Ok(())
    }

    fn line_to(&mut self, to: Vector2D) {
        self.path.push_segment(Segment::line(LineSegment2D::new(self.current, to)));
        self.current = to;
        self.last_control = LastControl::None;
    }

    fn cubic_to(&mut self, ctrl0: Vector2D, ctrl1: Vector2D, to: Vector2D) {
        self.path.push_segment(Segment::cubic(self.current, ctrl0, ctrl1, to));
        self.current = to;
        self.last_control = LastControl::Cubic(ctrl1);
    }

    fn quadratic_to(&mut self, ctrl: Vector2D, to: Vector2D) {
        self.path.push_segment(Segment::quadratic(self.current, ctrl, to));
        self.current = to;
        self.last_control = LastControl::Quadratic(ctrl);
    }

    fn close_path(&mut self) {
        self.path.push_close(self.subpath_start);
        self.current = self.subpath_start;
        self.last_control = LastControl::None;
    }
}

/// Arc flags in command records are numbers and must be exactly 0 or 1.
fn flag(value: f64, position: usize) -> Result<bool, ParseError> {
    if value == 0.0 {
        Ok(false)
    } else if value == 1.0 {
        Ok(true)
    } else {
        Err(ParseError::InvalidFlag { position })
    }
}
