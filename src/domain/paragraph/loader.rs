//! 段落加载器
//!
//! 将文本流按行读入，依据空行与缩进启发式合并为段落

use std::io::{self, BufRead, ErrorKind};

use super::ParagraphSequence;

/// 段落加载配置
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// 流结束时是否输出未以空行结束的末尾段落
    ///
    /// 默认 false：末尾段落被丢弃
    pub flush_trailing: bool,
}

/// 从文本流加载段落序列
///
/// 规则：
/// 1. 空行：缓冲区非空时追加换行并输出缓冲区；否则输出空行占位符
/// 2. 非空行：追加该行与一个空格；以空格开头的行（缩进行）再追加换行，避免后续行接在其后
/// 3. `\n`、`\r\n` 与单独的 `\r` 均结束一行
/// 4. 非法 UTF-8 以 U+FFFD 替换并记录日志，继续读取
/// 5. 读取失败时记录日志，返回已累积的部分结果
pub fn load_paragraphs<R: BufRead>(mut reader: R, options: &LoadOptions) -> ParagraphSequence {
    let mut buffer = String::new();
    let mut paragraphs = ParagraphSequence::new();
    let mut line_count = 0usize;
    let mut bytes = Vec::new();

    loop {
        bytes.clear();
        match read_line(&mut reader, &mut bytes) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    line = line_count + 1,
                    paragraphs = paragraphs.len(),
                    "Text stream read failed, keeping partial paragraphs"
                );
                break;
            }
        }
        line_count += 1;

        let line = match std::str::from_utf8(&bytes) {
            Ok(line) => line.to_string(),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    line = line_count,
                    "Invalid UTF-8 in text stream, replacing"
                );
                String::from_utf8_lossy(&bytes).into_owned()
            }
        };

        if line.is_empty() {
            if buffer.is_empty() {
                paragraphs.push_sentinel();
            } else {
                buffer.push('\n');
                paragraphs.push(std::mem::take(&mut buffer));
            }
            continue;
        }

        buffer.push_str(&line);
        buffer.push(' ');
        if line.starts_with(' ') {
            buffer.push('\n');
        }
    }

    if !buffer.is_empty() {
        if options.flush_trailing {
            paragraphs.push(buffer);
        } else {
            tracing::debug!(
                chars = buffer.chars().count(),
                "Trailing paragraph without closing blank line dropped"
            );
        }
    }

    tracing::debug!(lines = line_count, paragraphs = paragraphs.len(), "Paragraphs loaded");
    paragraphs
}

/// 读取一行（不含行结束符）到 `line`，流结束且无内容时返回 false
fn read_line<R: BufRead>(reader: &mut R, line: &mut Vec<u8>) -> io::Result<bool> {
    loop {
        let (terminator, used) = {
            let available = match reader.fill_buf() {
                Ok(available) => available,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if available.is_empty() {
                return Ok(!line.is_empty());
            }
            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(i) => {
                    line.extend_from_slice(&available[..i]);
                    (Some(available[i]), i + 1)
                }
                None => {
                    line.extend_from_slice(available);
                    (None, available.len())
                }
            }
        };
        reader.consume(used);

        match terminator {
            Some(b'\r') => {
                skip_newline(reader);
                return Ok(true);
            }
            Some(_) => return Ok(true),
            None => {}
        }
    }
}

/// `\r` 之后紧跟的 `\n` 属于同一个行结束符
///
/// 读取错误留给下一次 `read_line` 处理
fn skip_newline<R: BufRead>(reader: &mut R) {
    loop {
        match reader.fill_buf() {
            Ok(available) => {
                if available.first() == Some(&b'\n') {
                    reader.consume(1);
                }
                return;
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(_) => return,
        }
    }
}

/// 使用默认配置加载（便捷方法）
pub fn load_paragraphs_default<R: BufRead>(reader: R) -> ParagraphSequence {
    load_paragraphs(reader, &LoadOptions::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufReader, Cursor, Read};

    fn load(text: &str) -> Vec<String> {
        load_paragraphs_default(Cursor::new(text.as_bytes())).into_inner()
    }

    fn load_flushed(text: &str) -> Vec<String> {
        let options = LoadOptions {
            flush_trailing: true,
        };
        load_paragraphs(Cursor::new(text.as_bytes()), &options).into_inner()
    }

    #[test]
    fn test_trailing_paragraph_dropped_by_default() {
        assert_eq!(load("Hello world\n\nFoo bar\n"), vec!["Hello world \n"]);
    }

    #[test]
    fn test_trailing_paragraph_flushed_when_enabled() {
        assert_eq!(
            load_flushed("Hello world\n\nFoo bar\n"),
            vec!["Hello world \n", "Foo bar "]
        );
    }

    #[test]
    fn test_single_blank_line_closes_one_paragraph() {
        assert_eq!(load("one\ntwo\n\nthree\n\n"), vec!["one two \n", "three \n"]);
    }

    #[test]
    fn test_double_blank_line_yields_sentinel() {
        assert_eq!(load("one\n\n\ntwo\n\n"), vec!["one \n", "\n", "two \n"]);
    }

    #[test]
    fn test_leading_blank_lines_are_sentinels() {
        assert_eq!(load("\n\nbody\n\n"), vec!["\n", "\n", "body \n"]);
    }

    #[test]
    fn test_indented_line_forces_break() {
        assert_eq!(
            load("  Chapter I\nIt was a dark\nand stormy night.\n\n"),
            vec!["  Chapter I \nIt was a dark and stormy night. \n"]
        );
    }

    #[test]
    fn test_space_only_line_is_not_blank() {
        assert!(load("A\n \nB\n").is_empty());
        assert_eq!(load_flushed("A\n \nB\n"), vec!["A   \nB "]);
    }

    #[test]
    fn test_crlf_line_endings() {
        assert_eq!(load("Hello\r\nworld\r\n\r\n"), vec!["Hello world \n"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(load("").is_empty());
        assert!(load_flushed("").is_empty());
    }

    #[test]
    fn test_output_never_longer_than_input_lines() {
        let samples = [
            "",
            "\n",
            "\n\n\n",
            "a\nb\nc",
            "a\n\nb\n\n\nc\n \n d\n\n",
            " x\n y\n\n\n\n z\n",
        ];
        for text in samples {
            let line_count = text.lines().count();
            assert!(load(text).len() <= line_count, "input {:?}", text);
            assert!(load_flushed(text).len() <= line_count, "input {:?}", text);
        }
    }

    #[test]
    fn test_only_sentinel_may_be_blank_like() {
        for paragraph in load("a\n\n\n\nb\n \n\n") {
            assert!(!paragraph.is_empty());
        }
    }

    #[test]
    fn test_lone_carriage_return_ends_line() {
        assert_eq!(
            load("Hello\rworld\r\rnext\r\r"),
            vec!["Hello world \n", "next \n"]
        );
        assert_eq!(load("a\r\n\rb\n\n"), vec!["a \n", "b \n"]);
    }

    #[test]
    fn test_crlf_split_across_buffer_refills() {
        let text = b"one\r\n\r\ntwo\r\n\r\n".to_vec();
        let reader = BufReader::with_capacity(1, Cursor::new(text));
        assert_eq!(
            load_paragraphs_default(reader).into_inner(),
            vec!["one \n", "two \n"]
        );
    }

    #[test]
    fn test_invalid_utf8_replaced_and_reading_continues() {
        let mut bytes = b"first\n\nsecond\n\n".to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe, b'\n', b'\n']);
        bytes.extend_from_slice(b"third\n\n");

        let paragraphs = load_paragraphs_default(Cursor::new(bytes)).into_inner();
        assert_eq!(
            paragraphs,
            vec!["first \n", "second \n", "\u{FFFD}\u{FFFD} \n", "third \n"]
        );
    }

    struct FailingReader {
        served: bool,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if self.served {
                return Err(std::io::Error::new(std::io::ErrorKind::Other, "disk gone"));
            }
            self.served = true;
            let data = b"kept\n\nlost";
            buf[..data.len()].copy_from_slice(data);
            Ok(data.len())
        }
    }

    #[test]
    fn test_io_error_keeps_partial_result() {
        let reader = BufReader::new(FailingReader { served: false });
        let paragraphs = load_paragraphs(
            reader,
            &LoadOptions {
                flush_trailing: true,
            },
        );
        assert_eq!(paragraphs.into_inner(), vec!["kept \n"]);
    }
}
