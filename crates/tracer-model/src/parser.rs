//! Parser for the intermediate format.
//!
//! The input is a sequence of sections, each introduced by a bare header line
//! and ended by a blank line, a whitespace-led line or end of input. Every
//! data line is colon-separated with a fixed grammar per section. Lines
//! starting with `#` are comments.

use crate::cell::{Cell, CellKind, IntegerDecl, Location, LocationFlag, Range};
use crate::error::{ModelError, ModelResult};
use crate::index::{ClockId, EdgeId, ExprIndex, IntegerId, LayoutIndex, ProcessId};
use crate::model::{Edge, Model, Process};
use crate::scan::Scanner;
use std::fmt;
use std::str::Lines;
use tracing::{debug, trace};

/// Section of the intermediate format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Layout,
    Instructions,
    Processes,
    Locations,
    Edges,
    Expressions,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Layout,
        Section::Instructions,
        Section::Processes,
        Section::Locations,
        Section::Edges,
        Section::Expressions,
    ];

    /// Header line introducing the section.
    pub fn header(self) -> &'static str {
        match self {
            Section::Layout => "layout",
            Section::Instructions => "instructions",
            Section::Processes => "processes",
            Section::Locations => "locations",
            Section::Edges => "edges",
            Section::Expressions => "expressions",
        }
    }

    pub fn from_header(line: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.header() == line)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// Parser configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseConfig {
    /// Append the priced-automata integers (`infimum_cost`, `offset_cost`
    /// and one `#rate[clock]` per non-reference clock) after the layout.
    pub priced: bool,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            priced: cfg!(feature = "priced"),
        }
    }
}

/// A layout line after matching, before names are registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Declaration<'a> {
    Clock {
        name: &'a str,
        nr: i32,
    },
    Const {
        value: i32,
    },
    Integer {
        name: &'a str,
        range: Range,
        init: i32,
        nr: i32,
        meta: bool,
    },
    SysMeta {
        name: &'a str,
        range: Range,
    },
    Location {
        name: &'a str,
        flag: LocationFlag,
    },
    Fixed {
        name: &'a str,
        range: Range,
    },
    Cost,
}

type Grammar = for<'a> fn(&mut Scanner<'a>) -> Option<Declaration<'a>>;

/// Layout grammars in match priority. Each sees the line after `<index>:`.
const LAYOUT_GRAMMARS: [Grammar; 10] = [
    clock,
    constant,
    var,
    meta,
    sys_meta,
    location_plain,
    location_committed,
    location_urgent,
    fixed,
    cost,
];

fn clock<'a>(s: &mut Scanner<'a>) -> Option<Declaration<'a>> {
    s.literal("clock:")?;
    let nr = s.int()?;
    s.literal(":")?;
    let name = s.word()?;
    Some(Declaration::Clock { name, nr })
}

fn constant<'a>(s: &mut Scanner<'a>) -> Option<Declaration<'a>> {
    s.literal("const:")?;
    let value = s.int()?;
    Some(Declaration::Const { value })
}

fn integer<'a>(s: &mut Scanner<'a>, keyword: &str, meta: bool) -> Option<Declaration<'a>> {
    s.literal(keyword)?;
    let [min, max, init, nr] = colon_ints::<4>(s)?;
    s.literal(":")?;
    let name = s.word()?;
    Some(Declaration::Integer {
        name,
        range: Range { min, max },
        init,
        nr,
        meta,
    })
}

fn var<'a>(s: &mut Scanner<'a>) -> Option<Declaration<'a>> {
    integer(s, "var:", false)
}

fn meta<'a>(s: &mut Scanner<'a>) -> Option<Declaration<'a>> {
    integer(s, "meta:", true)
}

fn ranged<'a>(s: &mut Scanner<'a>, keyword: &str) -> Option<(Range, &'a str)> {
    s.literal(keyword)?;
    let [min, max] = colon_ints::<2>(s)?;
    s.literal(":")?;
    let name = s.word()?;
    Some((Range { min, max }, name))
}

fn sys_meta<'a>(s: &mut Scanner<'a>) -> Option<Declaration<'a>> {
    let (range, name) = ranged(s, "sys_meta:")?;
    Some(Declaration::SysMeta { name, range })
}

fn fixed<'a>(s: &mut Scanner<'a>) -> Option<Declaration<'a>> {
    let (range, name) = ranged(s, "static:")?;
    Some(Declaration::Fixed { name, range })
}

fn location<'a>(s: &mut Scanner<'a>, prefix: &str, flag: LocationFlag) -> Option<Declaration<'a>> {
    s.literal(prefix)?;
    let name = s.word()?;
    Some(Declaration::Location { name, flag })
}

fn location_plain<'a>(s: &mut Scanner<'a>) -> Option<Declaration<'a>> {
    location(s, "location::", LocationFlag::None)
}

fn location_committed<'a>(s: &mut Scanner<'a>) -> Option<Declaration<'a>> {
    location(s, "location:committed:", LocationFlag::Committed)
}

fn location_urgent<'a>(s: &mut Scanner<'a>) -> Option<Declaration<'a>> {
    location(s, "location:urgent:", LocationFlag::Urgent)
}

fn cost<'a>(s: &mut Scanner<'a>) -> Option<Declaration<'a>> {
    (s.word()? == "cost").then_some(Declaration::Cost)
}

/// `N` colon-separated integers.
fn colon_ints<const N: usize>(s: &mut Scanner<'_>) -> Option<[i32; N]> {
    let mut out = [0; N];
    for (i, slot) in out.iter_mut().enumerate() {
        if i > 0 {
            s.literal(":")?;
        }
        *slot = s.int()?;
    }
    Some(out)
}

/// `address:` followed by one to four operands.
fn instruction_operands(s: &mut Scanner<'_>) -> Option<Vec<i32>> {
    let _address = s.int()?;
    s.literal(":")?;
    let operands: Vec<i32> = std::iter::from_fn(|| s.int()).take(4).collect();
    (!operands.is_empty()).then_some(operands)
}

/// `index:initial:name`.
fn process_fields<'a>(s: &mut Scanner<'a>) -> Option<(i32, i32, &'a str)> {
    let [index, initial] = colon_ints::<2>(s)?;
    s.literal(":")?;
    let name = s.word()?;
    Some((index, initial, name))
}

fn is_trim_space(c: char) -> bool {
    matches!(c, ' ' | '\r' | '\n' | '\t' | '\x0b')
}

/// Parser for intermediate-format text.
pub struct Parser<'a> {
    lines: Lines<'a>,
    /// Number of the last line read (1-indexed).
    line: usize,
    config: ParseConfig,
    model: Model,
    seen_layout: bool,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str, config: ParseConfig) -> Self {
        Self {
            lines: source.lines(),
            line: 0,
            config,
            model: Model::default(),
            seen_layout: false,
        }
    }

    /// Parse all sections. Any error aborts the whole parse.
    pub fn parse_model(mut self) -> ModelResult<Model> {
        while let Some(header) = self.next_line() {
            if header.trim().is_empty() {
                continue;
            }
            let line = self.line;
            let section = Section::from_header(header).ok_or_else(|| ModelError::UnknownSection {
                name: header.to_string(),
                line,
            })?;

            match section {
                Section::Layout => {
                    if self.seen_layout {
                        return Err(ModelError::DuplicateSection { section, line });
                    }
                    self.seen_layout = true;
                    self.parse_layout()?;
                    if self.config.priced {
                        self.append_priced_cells();
                    }
                }
                Section::Instructions => self.parse_instructions()?,
                Section::Processes => self.parse_processes()?,
                Section::Locations => self.parse_locations()?,
                Section::Edges => self.parse_edges()?,
                Section::Expressions => self.parse_expressions()?,
            }
            debug!(%section, start = line, end = self.line, "parsed section");
        }

        debug!(
            cells = self.model.layout.len(),
            clocks = self.model.clocks.len(),
            integers = self.model.integers.len(),
            processes = self.model.processes.len(),
            edges = self.model.edges.len(),
            expressions = self.model.expressions.len(),
            instructions = self.model.instructions.len(),
            "model parsed"
        );
        Ok(self.model)
    }

    fn next_line(&mut self) -> Option<&'a str> {
        let line = self.lines.next()?;
        self.line += 1;
        Some(line)
    }

    /// Next data line of the current section, or `None` at its end.
    /// With `keep_tab`, tab-led lines are returned instead of ending the section.
    fn data_line(&mut self, keep_tab: bool) -> Option<&'a str> {
        loop {
            let line = self.next_line()?;
            match line.chars().next() {
                Some('#') => continue,
                None => return None,
                Some('\t') if keep_tab => return Some(line),
                Some(c) if c.is_whitespace() => return None,
                Some(_) => return Some(line),
            }
        }
    }

    fn malformed(&self, section: Section, text: &str) -> ModelError {
        ModelError::Malformed {
            section,
            text: text.to_string(),
            line: self.line,
        }
    }

    /// Check `index` against a table of length `len`.
    fn bounded(&self, what: &'static str, index: i32, len: usize) -> ModelResult<usize> {
        usize::try_from(index)
            .ok()
            .filter(|&i| i < len)
            .ok_or(ModelError::OutOfRange {
                what,
                index: index.into(),
                len,
                line: self.line,
            })
    }

    fn check_order(&self, section: Section, index: i32, expected: usize) -> ModelResult<()> {
        if usize::try_from(index).ok() == Some(expected) {
            Ok(())
        } else {
            Err(ModelError::IndexOutOfOrder {
                section,
                expected,
                found: index.into(),
                line: self.line,
            })
        }
    }

    fn parse_layout(&mut self) -> ModelResult<()> {
        while let Some(text) = self.data_line(false) {
            let cell = self.parse_cell(text)?;
            self.model.layout.push(cell);
        }
        Ok(())
    }

    fn parse_cell(&mut self, text: &'a str) -> ModelResult<Cell> {
        let line = self.line;
        let unknown = || ModelError::UnknownCell {
            text: text.to_string(),
            line,
        };

        let mut head = Scanner::new(text);
        let index = head.int().ok_or_else(unknown)?;
        head.literal(":").ok_or_else(unknown)?;
        let body = head.rest();
        let decl = LAYOUT_GRAMMARS
            .iter()
            .find_map(|grammar| grammar(&mut Scanner::new(body)))
            .ok_or_else(unknown)?;

        self.check_order(Section::Layout, index, self.model.layout.len())?;
        Ok(self.declare(decl))
    }

    /// Build the cell for a matched line, registering clock and integer names.
    fn declare(&mut self, decl: Declaration<'_>) -> Cell {
        match decl {
            Declaration::Clock { name, nr } => {
                let id = ClockId(self.model.clocks.len());
                self.note_number("clock", nr, id.0);
                self.model.clocks.push(name.to_string());
                Cell::new(Some(name.to_string()), CellKind::Clock { id })
            }
            Declaration::Const { value } => Cell::new(None, CellKind::Const { value }),
            Declaration::Integer {
                name,
                range,
                init,
                nr,
                meta,
            } => {
                let id = IntegerId(self.model.integers.len());
                self.note_number("integer", nr, id.0);
                self.model.integers.push(name.to_string());
                let decl = IntegerDecl { range, init, id };
                let kind = if meta {
                    CellKind::Meta(decl)
                } else {
                    CellKind::Integer(decl)
                };
                Cell::new(Some(name.to_string()), kind)
            }
            Declaration::SysMeta { name, range } => {
                Cell::new(Some(name.to_string()), CellKind::SysMeta(range))
            }
            Declaration::Location { name, flag } => {
                trace!(name, %flag, "location cell");
                Cell::new(
                    Some(name.to_string()),
                    CellKind::Location(Location {
                        flag,
                        ..Location::default()
                    }),
                )
            }
            Declaration::Fixed { name, range } => {
                Cell::new(Some(name.to_string()), CellKind::Fixed(range))
            }
            Declaration::Cost => Cell::new(None, CellKind::Cost),
        }
    }

    fn note_number(&self, what: &'static str, declared: i32, position: usize) {
        if usize::try_from(declared).ok() != Some(position) {
            debug!(
                line = self.line,
                what, declared, position, "declared number differs from table position"
            );
        }
    }

    fn append_priced_cells(&mut self) {
        let mut names = vec!["infimum_cost".to_string(), "offset_cost".to_string()];
        names.extend(
            self.model
                .clocks
                .iter()
                .skip(1)
                .map(|clock| format!("#rate[{clock}]")),
        );

        for name in names {
            let id = IntegerId(self.model.integers.len());
            debug!(name = %name, id = id.0, "appending priced integer");
            self.model.integers.push(name.clone());
            self.model.layout.push(Cell::new(
                Some(name),
                CellKind::Integer(IntegerDecl {
                    range: Range {
                        min: i32::MIN,
                        max: i32::MAX,
                    },
                    init: 0,
                    id,
                }),
            ));
        }
    }

    fn parse_instructions(&mut self) -> ModelResult<()> {
        while let Some(text) = self.data_line(true) {
            // Disassembly listing, not data.
            if text.starts_with('\t') {
                continue;
            }
            let operands = instruction_operands(&mut Scanner::new(text))
                .ok_or_else(|| self.malformed(Section::Instructions, text))?;
            self.model.instructions.extend(operands);
        }
        Ok(())
    }

    fn parse_processes(&mut self) -> ModelResult<()> {
        while let Some(text) = self.data_line(false) {
            let Some((index, initial, name)) = process_fields(&mut Scanner::new(text)) else {
                return Err(self.malformed(Section::Processes, text));
            };
            self.check_order(Section::Processes, index, self.model.processes.len())?;
            let initial = usize::try_from(initial)
                .map_err(|_| self.malformed(Section::Processes, text))?;

            self.model
                .processes
                .push(Process::new(name.to_string(), LayoutIndex(initial)));
        }
        Ok(())
    }

    fn parse_locations(&mut self) -> ModelResult<()> {
        while let Some(text) = self.data_line(false) {
            let [index, process, invariant] = colon_ints::<3>(&mut Scanner::new(text))
                .ok_or_else(|| self.malformed(Section::Locations, text))?;
            let index = self.bounded("layout", index, self.model.layout.len())?;
            let process = self.bounded("process", process, self.model.processes.len())?;

            let line = self.line;
            let location = self.model.layout[index]
                .as_location_mut()
                .ok_or(ModelError::NotALocation { index, line })?;
            location.process = Some(ProcessId(process));
            location.invariant = Some(ExprIndex(invariant));
            self.model.processes[process].push_location(LayoutIndex(index));
        }
        Ok(())
    }

    fn parse_edges(&mut self) -> ModelResult<()> {
        while let Some(text) = self.data_line(false) {
            let [process, source, target, guard, sync, update] =
                colon_ints::<6>(&mut Scanner::new(text))
                    .ok_or_else(|| self.malformed(Section::Edges, text))?;
            let process = self.bounded("process", process, self.model.processes.len())?;
            let source = self.bounded("source location", source, self.model.layout.len())?;
            let target = self.bounded("target location", target, self.model.layout.len())?;

            let id = EdgeId(self.model.edges.len());
            self.model.edges.push(Edge {
                process: ProcessId(process),
                source: LayoutIndex(source),
                target: LayoutIndex(target),
                guard: ExprIndex(guard),
                sync: ExprIndex(sync),
                update: ExprIndex(update),
            });
            self.model.processes[process].push_edge(id);
        }
        Ok(())
    }

    fn parse_expressions(&mut self) -> ModelResult<()> {
        while let Some(text) = self.data_line(false) {
            let index = Scanner::new(text)
                .int()
                .ok_or_else(|| self.malformed(Section::Expressions, text))?;

            // The expression text follows the third colon.
            let Some((colon, _)) = text.match_indices(':').nth(2) else {
                return Err(ModelError::MissingColon {
                    text: text.to_string(),
                    line: self.line,
                });
            };
            let expr = text[colon + 1..].trim_matches(is_trim_space);
            self.model
                .expressions
                .insert(ExprIndex(index), expr.to_string());
        }
        Ok(())
    }
}

/// Parse intermediate-format text into a [`Model`].
pub fn parse(source: &str, config: &ParseConfig) -> ModelResult<Model> {
    Parser::new(source, *config).parse_model()
}
