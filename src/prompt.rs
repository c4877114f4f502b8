//! 用户交互：提示消息与阻塞式选择

use console::style;
use std::io::{self, BufRead, Write};

use crate::error::{Result, ScaffoldError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Level {
    Info,
    Warning,
    Success,
}

/// 交互能力：读取一行回答、输出通知
pub(crate) trait Interaction {
    /// 显示问题并读取一行；输入流结束时返回 `Ok(None)`
    fn read_answer(&mut self, question: &str) -> io::Result<Option<String>>;

    fn notify(&mut self, level: Level, message: &str);
}

/// 反复提问直到得到合法回答，无超时、无默认值
pub(crate) fn prompt_choice(
    ui: &mut dyn Interaction,
    question: &str,
    valid: &[&str],
) -> Result<String> {
    loop {
        let answer = ui.read_answer(question).map_err(ScaffoldError::Prompt)?;
        let Some(answer) = answer else {
            return Err(ScaffoldError::Prompt(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a valid answer was given",
            )));
        };
        let answer = answer.trim();
        if valid.contains(&answer) {
            return Ok(answer.to_string());
        }
        tracing::debug!(answer, "rejected answer, asking again");
    }
}

/// 控制终端：stdin 读入，通知写到 stdout / stderr
pub(crate) struct Terminal;

impl Interaction for Terminal {
    fn read_answer(&mut self, question: &str) -> io::Result<Option<String>> {
        let mut err = io::stderr();
        write!(err, "{question}")?;
        err.flush()?;
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn notify(&mut self, level: Level, message: &str) {
        match level {
            Level::Info => println!("{message}"),
            Level::Success => println!("{} {message}", style("Success:").green().bold()),
            Level::Warning => eprintln!("{} {message}", style("Warning:").yellow().bold()),
        }
    }
}

#[cfg(test)]
pub(crate) use scripted::Scripted;
