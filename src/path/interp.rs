use std::borrow::Cow;

use crate::foundation::core::{Bounds, Point, Rect};
use crate::path::lexer::{Command, CommandKind, Token, TokenKind};

/// One moveto-delimited contour.
#[derive(Clone, Debug, PartialEq)]
pub struct SubPath<'a> {
    /// Tokens in source order. Numeric text is the original literal except for promoted
    /// relative movetos and zero-filled truncated groups.
    pub tokens: Vec<Cow<'a, str>>,
    /// Conservative bounds over endpoints and curve control points.
    pub bbox: Rect,
    /// Command endpoints in order; control points are not included.
    pub polygon: Vec<Point>,
    /// Absolute coordinate of the opening moveto.
    pub start: Point,
}

impl SubPath<'_> {
    /// Space-joined path data for this contour alone.
    pub fn to_path_data(&self) -> String {
        self.tokens.join(" ")
    }
}

/// Walk a token stream and split it into subpaths.
///
/// Never fails: truncated coordinate groups are zero-filled and numbers without an active
/// command are carried through verbatim without geometry.
pub fn collect_subpaths<'a>(tokens: &[Token<'a>]) -> Vec<SubPath<'a>> {
    let mut it = Interp {
        tokens,
        pos: 0,
        pen: Point::ZERO,
        start: Point::ZERO,
        active: Active::Inert,
        open: Open::default(),
        done: Vec::new(),
    };
    it.run();
    it.done
}

/// What a bare number means at the current position.
#[derive(Clone, Copy, Debug)]
enum Active {
    /// No coordinate-taking command is active (stream start, closepath, unknown letter).
    Inert,
    /// Coordinates repeat this command.
    Repeat(Command),
    /// A relative moveto was promoted to `M`; the next bare number opens an explicit `l`.
    AfterPromotedMove,
}

#[derive(Default)]
struct Open<'a> {
    tokens: Vec<Cow<'a, str>>,
    bounds: Bounds,
    polygon: Vec<Point>,
}

struct Interp<'t, 'a> {
    tokens: &'t [Token<'a>],
    pos: usize,
    pen: Point,
    start: Point,
    active: Active,
    open: Open<'a>,
    done: Vec<SubPath<'a>>,
}

impl<'a> Interp<'_, 'a> {
    fn run(&mut self) {
        while let Some(tok) = self.tokens.get(self.pos).copied() {
            let opens_subpath =
                matches!(tok.kind, TokenKind::Command(c) if c.kind == CommandKind::Move);
            if !opens_subpath && self.open.tokens.is_empty() {
                self.synthesize_move();
            }
            match tok.kind {
                TokenKind::Command(cmd) => {
                    self.pos += 1;
                    self.command(cmd, tok.text);
                }
                TokenKind::Letter(_) => {
                    tracing::trace!(offset = tok.span.start, letter = tok.text, "unknown letter");
                    self.pos += 1;
                    self.open.tokens.push(Cow::Borrowed(tok.text));
                    self.active = Active::Inert;
                }
                TokenKind::Number(_) => self.coordinates(tok),
            }
        }
        self.finish_subpath();
    }

    fn command(&mut self, cmd: Command, text: &'a str) {
        match cmd.kind {
            CommandKind::Move => {
                self.finish_subpath();
                if cmd.relative {
                    self.promote_relative_move();
                } else {
                    self.open.tokens.push(Cow::Borrowed(text));
                    self.group(cmd);
                }
            }
            CommandKind::Close => {
                self.open.tokens.push(Cow::Borrowed(text));
                self.pen = self.start;
                self.active = Active::Inert;
            }
            _ => {
                self.open.tokens.push(Cow::Borrowed(text));
                self.active = Active::Repeat(cmd);
                self.group(cmd);
            }
        }
    }

    fn coordinates(&mut self, tok: Token<'a>) {
        match self.active {
            Active::Inert => {
                tracing::trace!(offset = tok.span.start, "number without active command");
                self.pos += 1;
                self.open.tokens.push(Cow::Borrowed(tok.text));
            }
            Active::AfterPromotedMove => {
                let line = Command {
                    kind: CommandKind::Line,
                    relative: true,
                };
                self.open.tokens.push(Cow::Borrowed("l"));
                self.active = Active::Repeat(line);
                self.group(line);
            }
            Active::Repeat(cmd) => self.group(cmd),
        }
    }

    // `m dx dy` becomes `M x y` in absolute terms so every subpath is self-contained.
    fn promote_relative_move(&mut self) {
        let (values, _) = self.take_params(2);
        let p = Point::new(self.pen.x + values[0], self.pen.y + values[1]);
        self.open.tokens.push(Cow::Borrowed("M"));
        self.open.tokens.push(Cow::Owned(format_coord(p.x)));
        self.open.tokens.push(Cow::Owned(format_coord(p.y)));
        self.move_to(p);
        self.active = Active::AfterPromotedMove;
    }

    // Data that does not open with a moveto gets an explicit `M` at the pen (the origin at
    // stream start) so the contour stays valid path data on its own.
    fn synthesize_move(&mut self) {
        let p = self.pen;
        tracing::trace!(x = p.x, y = p.y, "path data does not open with a moveto");
        self.open.tokens.push(Cow::Borrowed("M"));
        self.open.tokens.push(Cow::Owned(format_coord(p.x)));
        self.open.tokens.push(Cow::Owned(format_coord(p.y)));
        self.move_to(p);
    }

    fn group(&mut self, cmd: Command) {
        let (p, texts) = self.take_params(cmd.kind.param_count());
        self.open.tokens.extend(texts);

        let base = if cmd.relative { self.pen } else { Point::ZERO };
        let at = |x: f64, y: f64| Point::new(base.x + x, base.y + y);

        match cmd.kind {
            CommandKind::Move => {
                self.move_to(at(p[0], p[1]));
                // Further pairs after a moveto are implicit linetos.
                self.active = Active::Repeat(Command {
                    kind: CommandKind::Line,
                    relative: cmd.relative,
                });
            }
            CommandKind::Line | CommandKind::SmoothQuad => self.line_to(at(p[0], p[1])),
            CommandKind::Horizontal => self.line_to(Point::new(base.x + p[0], self.pen.y)),
            CommandKind::Vertical => self.line_to(Point::new(self.pen.x, base.y + p[0])),
            CommandKind::Cubic => {
                self.open.bounds.add(at(p[0], p[1]));
                self.open.bounds.add(at(p[2], p[3]));
                self.line_to(at(p[4], p[5]));
            }
            CommandKind::SmoothCubic | CommandKind::Quad => {
                self.open.bounds.add(at(p[0], p[1]));
                self.line_to(at(p[2], p[3]));
            }
            // Only the endpoint; the arc's sweep between endpoints is not bounded.
            CommandKind::Arc => self.line_to(at(p[5], p[6])),
            CommandKind::Close => {}
        }
    }

    // Pull up to `n` numbers; missing trailing values are filled with `0`.
    fn take_params(&mut self, n: usize) -> ([f64; 7], Vec<Cow<'a, str>>) {
        let mut values = [0.0; 7];
        let mut texts = Vec::with_capacity(n);
        for slot in values.iter_mut().take(n) {
            match self.tokens.get(self.pos) {
                Some(Token {
                    kind: TokenKind::Number(v),
                    text,
                    ..
                }) => {
                    *slot = *v;
                    texts.push(Cow::Borrowed(*text));
                    self.pos += 1;
                }
                _ => texts.push(Cow::Borrowed("0")),
            }
        }
        (values, texts)
    }

    fn move_to(&mut self, p: Point) {
        self.start = p;
        self.line_to(p);
    }

    fn line_to(&mut self, p: Point) {
        self.open.bounds.add(p);
        self.open.polygon.push(p);
        self.pen = p;
    }

    fn finish_subpath(&mut self) {
        let open = std::mem::take(&mut self.open);
        if open.tokens.is_empty() {
            return;
        }
        self.done.push(SubPath {
            tokens: open.tokens,
            bbox: open.bounds.finish(self.pen),
            polygon: open.polygon,
            start: self.start,
        });
    }
}

/// Render a computed coordinate the way a shortest round-trip formatter would, without a
/// negative zero.
pub(crate) fn format_coord(v: f64) -> String {
    if v == 0.0 {
        "0".to_owned()
    } else {
        format!("{v}")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/interp.rs"]
mod tests;
