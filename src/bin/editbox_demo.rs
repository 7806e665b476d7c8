//! `editbox_demo` - interactive form built from editbox widgets
//!
//! A name field, a soft-wrapped notes area that grows with its content and a
//! color list. Tab (or Enter in the name field and the list) moves focus,
//! Esc quits and prints what was entered.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin editbox_demo
//! cargo run --bin editbox_demo -- --accent '#3a3a8c' --no-wrap
//! cargo run --bin editbox_demo -- --headless
//! ```

use editbox::{
    CellBuffer, ChannelInput, Color, EditBox, EditBoxOptions, Event, EventSource, KeyCode,
    QueuedInput, SelectList, SelectOptions, Style, Surface, TerminalInput, TerminalSession,
    TerminalSurface, TextAttributes, ViewportOptions, Widget, label, text_block,
};
use std::ffi::OsString;

const HELP_TEXT: &str = "editbox_demo - editbox widget demonstration

USAGE:
    editbox_demo [OPTIONS]

OPTIONS:
    -h, --help              Print this help message and exit
    --accent <COLOR>        Field background: hex (#rrggbb), palette index
                            or 'default' (default: 4)
    --no-wrap               Scroll the notes area sideways instead of wrapping
    --headless              Type a scripted session into an in-memory grid
                            and print it (no TTY required)
";

const FIELD_X: u32 = 9;
const NOTES_ROWS: u32 = 3;
const NOTES_MAX_ROWS: u32 = 8;
const COLORS: [&str; 9] = [
    "red", "green", "blue", "", "cyan", "magenta", "yellow", "", "default",
];

/// Options parsed from the command line.
#[derive(Clone, Debug)]
struct Config {
    accent: Color,
    wrap: bool,
    headless: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            accent: Color::BLUE,
            wrap: true,
            headless: false,
        }
    }
}

enum ParseResult {
    Config(Config),
    Help,
    Error(String),
}

impl Config {
    fn from_args<I>(args: I) -> ParseResult
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();
        args.next();

        while let Some(arg) = args.next() {
            match arg.to_string_lossy().as_ref() {
                "-h" | "--help" => return ParseResult::Help,
                "--no-wrap" => config.wrap = false,
                "--headless" => config.headless = true,
                "--accent" => {
                    let Some(value) = args.next() else {
                        return ParseResult::Error("--accent requires a value".to_string());
                    };
                    match value.to_string_lossy().parse::<Color>() {
                        Ok(color) => config.accent = color,
                        Err(err) => return ParseResult::Error(err.to_string()),
                    }
                }
                other => return ParseResult::Error(format!("Unknown argument: {other}")),
            }
        }
        ParseResult::Config(config)
    }
}

/// The three focusable widgets.
struct Form {
    name: EditBox,
    notes: EditBox,
    colors: SelectList,
}

impl Form {
    fn new(config: &Config) -> editbox::Result<Self> {
        let field = Style::new(Color::WHITE, config.accent);
        let name = EditBox::input(FIELD_X, 2, 30, field)?;
        let notes = EditBox::new(EditBoxOptions {
            viewport: ViewportOptions {
                x: FIELD_X,
                y: 4,
                width: 40,
                height: NOTES_ROWS,
                wrap: config.wrap,
                autoexpand: true,
                max_height: Some(NOTES_MAX_ROWS),
                style: field,
                show_line_terminators: false,
            },
            exit_keys: vec![KeyCode::Esc, KeyCode::Tab],
        })?;
        let colors = SelectList::new(
            SelectOptions {
                x: FIELD_X,
                y: 4 + NOTES_MAX_ROWS + 1,
                width: 20,
                height: 4,
                style: field,
                selected_style: field.with_attributes(TextAttributes::BOLD | TextAttributes::INVERSE),
                ..SelectOptions::default()
            },
            COLORS,
        )?;
        Ok(Self {
            name,
            notes,
            colors,
        })
    }

    fn draw<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let heading = Style::NONE.with_attributes(TextAttributes::BOLD);
        label(surface, 1, 0, 0, heading, "editbox demo: Tab switches field, Esc quits");
        text_block(
            surface,
            1,
            2,
            FIELD_X - 2,
            0,
            Style::NONE,
            "Name:\n\nNotes:",
        );
        label(surface, 1, 4 + NOTES_MAX_ROWS + 1, FIELD_X - 2, Style::NONE, "Color:");
        self.name.render(surface);
        Grown(&mut self.notes).render(surface);
        self.colors.render(surface);
    }

    /// Cycle focus until Esc. Returns early if input ends.
    fn run<I, S>(&mut self, input: &mut I, surface: &mut S) -> editbox::Result<()>
    where
        I: EventSource + ?Sized,
        S: Surface + ?Sized,
    {
        self.draw(surface);
        let mut focus = 0usize;
        loop {
            let exit = match focus {
                0 => self.name.run_until_exit(input, surface),
                1 => Grown(&mut self.notes).run_until_exit(input, surface),
                _ => self.colors.run_until_exit(input, surface),
            }?;
            if exit.key_code() == Some(KeyCode::Esc) {
                return Ok(());
            }
            focus = (focus + 1) % 3;
        }
    }

    fn summary(&self) -> String {
        format!(
            "Name:  {}\nNotes: {:?}\nColor: {}",
            self.name.text(),
            self.notes.text(),
            self.colors.text()
        )
    }
}

/// An autoexpanding edit box that blanks the rows it may grow into before
/// painting, so shrinking leaves nothing behind.
struct Grown<'a>(&'a mut EditBox);

impl Widget for Grown<'_> {
    fn handle_event(&mut self, event: &Event) -> bool {
        self.0.handle_event(event)
    }

    fn render<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let options = *self.0.viewport().options();
        let rows = self.0.viewport().max_height() as u32;
        text_block(surface, options.x, options.y, options.width, rows, Style::NONE, "");
        self.0.render(surface);
    }
}

fn run_headless(config: &Config) -> editbox::Result<()> {
    let mut input = QueuedInput::new();
    input.push_str("Ada Lovelace");
    input.push_key(KeyCode::Tab);
    input.push_str("Notes wrap at the edge of the box and the box grows to fit them.\nSecond line.");
    input.push_key(KeyCode::Tab);
    input.push_key(KeyCode::Down);
    input.push_key(KeyCode::Down);
    input.push_key(KeyCode::Esc);

    let mut surface = CellBuffer::new(60, 20);
    let mut form = Form::new(config)?;
    form.run(&mut input, &mut surface)?;
    println!("{}", surface.to_text());
    println!("{}", form.summary());
    Ok(())
}

fn run_interactive(config: &Config) -> editbox::Result<()> {
    let mut form = Form::new(config)?;
    {
        let _session = TerminalSession::start()?;
        let mut surface = TerminalSurface::stdout()?;
        let mut input = ChannelInput::spawn(TerminalInput::stdin())?;
        form.run(&mut input, &mut surface)?;
    }
    println!("{}", form.summary());
    Ok(())
}

fn main() {
    let result = match Config::from_args(std::env::args_os()) {
        ParseResult::Config(config) if config.headless => run_headless(&config),
        ParseResult::Config(config) => run_interactive(&config),
        ParseResult::Help => {
            print!("{HELP_TEXT}");
            Ok(())
        }
        ParseResult::Error(msg) => {
            eprintln!("Error: {msg}");
            eprintln!("Run with --help for usage information.");
            std::process::exit(1);
        }
    };
    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
