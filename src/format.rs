//! Cell Text Conventions
//!
//! This module documents the textual conventions the codec uses to carry
//! typed values in plain CSV cells, without a schema or a type column.
//!
//! # Overview
//!
//! A cell is one field of one row in a CSV-like file. Splitting rows and
//! columns (and CSV quoting) is the host application's job; this crate only
//! ever sees and produces the text of a single cell. Types are carried by
//! lightweight conventions: a YAML mini-language for structured data,
//! reserved prefixes for non-YAML types, and ISO-8601 recognition for
//! dates.
//!
//! # Classification
//!
//! [`parse_cell`](crate::parse_cell) tests a cell against a fixed priority
//! order; the first match decides the type.
//!
//! | Priority | Shape | Result |
//! |----------|-------|--------|
//! | 1 | blank after trimming | `Empty` |
//! | 2 | `nan`, `.nan` (any case) | `NaN` |
//! | 3 | `inf`, `infinity`, `.inf`, with optional `-` (any case) | `Infinity` / `NegativeInfinity` |
//! | 4 | `/pattern/flags`, flags from `igmusyv` | `Regex` |
//! | 5 | `YYYY-M-D` or ISO-8601 timestamp | `DateTime` |
//! | 6 | anything YAML accepts | `Structured` (or `Null` for YAML null) |
//! | 7 | everything else | `Literal` |
//!
//! Rules 1–4 and 6 look at the cell with surrounding whitespace trimmed;
//! rule 5 looks at the original cell, so a leading space defeats the date
//! anchor.
//!
//! ## Dates
//!
//! Three ISO-8601 shapes are recognized, each with or without a UTC offset
//! (`Z` or `±HH:MM`): date+time+fractional seconds, date+time, and
//! date+hour:minute. The loose date-only form allows 1-2 digit month and
//! day. Offset-bearing text parses to a zoned timestamp; offset-free text
//! parses to a naive one.
//!
//! ```text
//! 2021-05-04T10:00:00.250Z      zoned, with fraction
//! 2021-05-04T10:00+02:00        zoned, hour:minute
//! 2021-05-04T10:00:00           naive
//! 2021-5-4                      naive, midnight
//! ```
//!
//! ## Regexes
//!
//! A cell starting with `/` and ending with `/` plus zero or more flag
//! letters is a regex. A leading `/` alone is not enough: `/usr/bin` has no
//! trailing flag group and classifies as a string.
//!
//! # Reserved strings
//!
//! A string written unescaped must not be mistaken for another type on
//! re-read. These shapes are reserved — some for the types above, some for
//! future constructs — and any string matching one is written double-quoted
//! with JSON-style escapes:
//!
//! | Shape | Reserved for |
//! |-------|--------------|
//! | `=…` | computed values |
//! | `/…/flags` | regexes |
//! | `#…` | comments |
//! | `N:…` | durations and times of day |
//! | `YYYY-M-D`, `D/M/Y`, ISO-8601 | dates |
//!
//! Durations and times of day themselves are *not* supported — the shapes
//! are reserved so cells never have to change meaning if they are added.
//!
//! # Writing
//!
//! [`stringify_cell`](crate::stringify_cell) picks the minimal safe form:
//!
//! - `null` for null (or an empty cell with the `null_as_empty` option);
//! - `""` for the empty string, so it stays distinguishable from an empty
//!   cell;
//! - ISO-8601 text for timestamps;
//! - the bare pattern for regexes (flags are dropped — see below);
//! - YAML for everything structured, block style by default or flow style
//!   (`[1, 2, 3]`) with the `flow` option;
//! - strings as-is when safe, quoted when reserved or when YAML requires it.
//!
//! # Known asymmetries
//!
//! Two folds are deliberate and documented rather than round-tripped:
//!
//! - **Regex flags are lost on write.** `/ab+c/gi` parses to a regex with
//!   flags `gi`, but writes back as `ab+c`. Re-emitting `/pattern/flags`
//!   would change what counts as a plain string on re-read, so the lossy
//!   behavior is kept.
//! - **`Empty` re-reads as `Null`.** Both write the same cell text, and the
//!   null marker wins on re-read.
//!
//! Everything else round-trips: parsing the written text yields a value
//! equal to the original.

// Documentation only; no implementation code.
