//! Interactive conversion session
//!
//! The prompt loop is a small state machine; every transition is produced
//! by one step function, so a failed step re-prompts instead of exiting.

use ascii_artgen::{AsciiGrid, ConvertConfig, ConvertError, convert, files};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// States of the prompt loop
enum SessionState {
    /// Waiting for an image path (or `exit`)
    Prompting,
    /// Checking that the entered path exists and has a supported format
    Validating { path: String },
    /// Decoding and converting the validated image
    Converting { path: PathBuf },
    /// Offering the optional exports and terminal display
    Exporting { grid: AsciiGrid },
    /// Saying goodbye
    Finished,
}

/// Run the interactive session until the user quits
///
/// Reads prompts from `input` and writes everything to `output`, so tests
/// can drive a whole session through in-memory buffers.
pub fn run<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<()> {
    print_banner(output)?;
    print_manual(output)?;

    let config = ConvertConfig::default();
    let mut state = SessionState::Prompting;

    loop {
        state = match state {
            SessionState::Prompting => prompt_for_image(input, output)?,
            SessionState::Validating { path } => validate(output, path)?,
            SessionState::Converting { path } => run_conversion(output, &config, &path)?,
            SessionState::Exporting { grid } => export(input, output, &config, &grid)?,
            SessionState::Finished => {
                writeln!(output, "\nThank you for using the ASCII Art Generator. Goodbye.")?;
                return Ok(());
            }
        };
    }
}

fn print_banner(output: &mut impl Write) -> io::Result<()> {
    writeln!(output, "ASCII Art Generator")?;
    writeln!(output, "===================")?;
    writeln!(output, "Convert your images into ASCII art.\n")
}

fn print_manual(output: &mut impl Write) -> io::Result<()> {
    writeln!(output, "1. Supported image formats: .jpg, .jpeg, .png")?;
    writeln!(output, "2. Provide the path to an image file.")?;
    writeln!(output, "3. Optionally save the ASCII art to a text file.")?;
    writeln!(output, "4. Optionally save the ASCII art as an image.")?;
    writeln!(output, "5. View the ASCII art directly in the terminal.")?;
    writeln!(output, "6. Type 'exit' at the path prompt to quit.\n")
}

fn prompt_for_image<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<SessionState> {
    let Some(path) = read_line(
        input,
        output,
        "Enter the path to the image file (or 'exit' to quit): ",
    )?
    else {
        return Ok(SessionState::Finished);
    };

    if path.eq_ignore_ascii_case("exit") {
        return Ok(SessionState::Finished);
    }
    if path.is_empty() {
        return Ok(SessionState::Prompting);
    }
    Ok(SessionState::Validating { path })
}

fn validate(output: &mut impl Write, path: String) -> io::Result<SessionState> {
    let candidate = Path::new(&path);

    if !candidate.exists() {
        report(output, &ConvertError::FileNotFound(candidate.to_path_buf()))?;
        return Ok(SessionState::Prompting);
    }
    if !files::is_valid_image_format(&path) {
        report(
            output,
            &ConvertError::UnsupportedFormat(candidate.to_path_buf()),
        )?;
        return Ok(SessionState::Prompting);
    }

    Ok(SessionState::Converting {
        path: candidate.to_path_buf(),
    })
}

fn run_conversion(
    output: &mut impl Write,
    config: &ConvertConfig,
    path: &Path,
) -> io::Result<SessionState> {
    let grid = match files::load_image(path).and_then(|image| convert(&image, config)) {
        Ok(grid) => grid,
        Err(err) => {
            report(output, &err)?;
            return Ok(SessionState::Prompting);
        }
    };

    Ok(SessionState::Exporting { grid })
}

/// Offer the three outputs in turn
///
/// Each export reports its own failure and moves on, so a bad image path
/// does not cost the user the text file or the terminal display.
fn export<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    config: &ConvertConfig,
    grid: &AsciiGrid,
) -> io::Result<SessionState> {
    let Some(text_name) = read_line(
        input,
        output,
        "\nOutput text file name (e.g., ascii_art.txt), or press Enter to skip: ",
    )?
    else {
        return Ok(SessionState::Finished);
    };
    if !text_name.is_empty() {
        let text_name = files::add_extension_if_missing(&text_name, ".txt");
        match files::write_text(grid, Path::new(&text_name)) {
            Ok(()) => writeln!(output, "ASCII art saved to '{}'.", text_name)?,
            Err(err) => report(output, &err)?,
        }
    }

    let Some(image_name) = read_line(
        input,
        output,
        "Output image file name (e.g., ascii_art.jpg), or press Enter to skip: ",
    )?
    else {
        return Ok(SessionState::Finished);
    };
    if !image_name.is_empty() {
        let image_name = files::add_extension_if_missing(&image_name, ".jpg");
        match files::save_raster(grid, Path::new(&image_name), config.glyph_size) {
            Ok(()) => writeln!(output, "ASCII art image saved to '{}'.", image_name)?,
            Err(err) => report(output, &err)?,
        }
    }

    let Some(show) = read_line(input, output, "Display the ASCII art here? (Y/N): ")? else {
        return Ok(SessionState::Finished);
    };
    if show.eq_ignore_ascii_case("y") {
        writeln!(output)?;
        write!(output, "{grid}")?;
    }

    let Some(again) = read_line(input, output, "\nProcess another image? (Y/N): ")? else {
        return Ok(SessionState::Finished);
    };
    if again.eq_ignore_ascii_case("y") {
        Ok(SessionState::Prompting)
    } else {
        Ok(SessionState::Finished)
    }
}

/// Prompt and read one trimmed line; `None` means end of input
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn report(output: &mut impl Write, err: &ConvertError) -> io::Result<()> {
    writeln!(output, "Error: {err}. Please try again.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};
    use std::io::Cursor;

    fn run_session(script: &str) -> String {
        let mut input = Cursor::new(script.to_string());
        let mut output = Vec::new();
        run(&mut input, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    fn write_test_image(dir: &Path) -> PathBuf {
        let path = dir.join("photo.png");
        let mut img = GrayImage::new(64, 32);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            *pixel = Luma([((x + y) * 3) as u8]);
        }
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn test_exit_immediately() {
        let transcript = run_session("exit\n");
        assert!(transcript.contains("ASCII Art Generator"));
        assert!(transcript.contains("Goodbye"));
    }

    #[test]
    fn test_exit_is_case_insensitive() {
        let transcript = run_session("EXIT\n");
        assert!(transcript.contains("Goodbye"));
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let transcript = run_session("");
        assert!(transcript.contains("Goodbye"));
    }

    #[test]
    fn test_missing_file_reprompts() {
        let transcript = run_session("no_such_file.png\nexit\n");
        assert!(transcript.contains("file not found"));
        assert!(transcript.contains("Goodbye"));
    }

    #[test]
    fn test_unsupported_format_reprompts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.bmp");
        std::fs::write(&path, b"bmp bytes").unwrap();

        let transcript = run_session(&format!("{}\nexit\n", path.display()));
        assert!(transcript.contains("unsupported format"));
    }

    #[test]
    fn test_corrupt_image_reprompts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not a png").unwrap();

        let transcript = run_session(&format!("{}\nexit\n", path.display()));
        assert!(transcript.contains("could not decode"));
    }

    #[test]
    fn test_full_conversion_with_text_export() {
        let dir = tempfile::tempdir().unwrap();
        let image_path = write_test_image(dir.path());
        let out_name = dir.path().join("art");

        let script = format!("{}\n{}\n\nn\nn\n", image_path.display(), out_name.display());
        let transcript = run_session(&script);

        assert!(transcript.contains("saved to"));
        let saved = std::fs::read_to_string(dir.path().join("art.txt")).unwrap();
        for line in saved.lines() {
            assert_eq!(line.chars().count(), 80);
        }
    }

    #[test]
    fn test_image_export_failure_is_isolated() {
        let dir = tempfile::tempdir().unwrap();
        let image_path = write_test_image(dir.path());
        let text_name = dir.path().join("art");

        // Image export into a nonexistent directory fails; the session still
        // reaches the display and continue prompts.
        let script = format!(
            "{}\n{}\n/no/such/dir/art\nn\nn\n",
            image_path.display(),
            text_name.display()
        );
        let transcript = run_session(&script);

        assert!(transcript.contains("could not save image"));
        assert!(dir.path().join("art.txt").exists());
        assert!(transcript.contains("Goodbye"));
    }

    #[test]
    fn test_display_prints_the_grid() {
        let dir = tempfile::tempdir().unwrap();
        let image_path = write_test_image(dir.path());

        let script = format!("{}\n\n\ny\nn\n", image_path.display());
        let transcript = run_session(&script);

        // 80-column rows appear in the transcript after the display prompt
        assert!(transcript.lines().any(|line| line.chars().count() == 80));
    }

    #[test]
    fn test_continue_processes_second_image() {
        let dir = tempfile::tempdir().unwrap();
        let image_path = write_test_image(dir.path());

        let script = format!(
            "{p}\n\n\nn\ny\n{p}\n\n\nn\nn\n",
            p = image_path.display()
        );
        let transcript = run_session(&script);

        let prompts = transcript.matches("Enter the path to the image file").count();
        assert_eq!(prompts, 2);
    }
}
