// ============================================================================
// Step catalog: the phrases generated scenarios are written in
// ============================================================================

/// A step phrase that generated scenarios use, with the cucumber expression
/// a step-definition file binds it to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepPattern {
    OnPage,
    TypeInto,
    ClickButton,
    ClickLink,
}

impl StepPattern {
    pub const ALL: [StepPattern; 4] = [
        StepPattern::OnPage,
        StepPattern::TypeInto,
        StepPattern::ClickButton,
        StepPattern::ClickLink,
    ];

    pub fn keyword(&self) -> &'static str {
        match self {
            StepPattern::OnPage => "Given",
            _ => "When",
        }
    }

    pub fn expression(&self) -> &'static str {
        match self {
            StepPattern::OnPage => "I am on the {string} page",
            StepPattern::TypeInto => "I type {string} into the {string} field",
            StepPattern::ClickButton => "I click the {string} button",
            StepPattern::ClickLink => "I click the {string} link",
        }
    }

    /// Number of `{string}` placeholders in the expression.
    pub fn arity(&self) -> usize {
        self.expression().matches("{string}").count()
    }

    /// Fill the expression's `{string}` placeholders, quoting each argument.
    pub fn phrase(&self, args: &[&str]) -> String {
        debug_assert_eq!(args.len(), self.arity(), "wrong argument count for {:?}", self);
        let mut out = String::new();
        let mut args = args.iter();
        let mut parts = self.expression().split("{string}").peekable();

        while let Some(literal) = parts.next() {
            out.push_str(literal);
            if parts.peek().is_some() {
                if let Some(arg) = args.next() {
                    out.push_str(&quote(arg));
                }
            }
        }

        out
    }
}

/// A generated step line, decoded back into its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedStep {
    OnPage { page: String },
    TypeInto { text: String, field: String },
    ClickButton { label: String },
    ClickLink { label: String },
    /// Free-form `Then` text, left for a human to implement
    Assertion(String),
}

/// Quote a step argument, escaping `\`, `"` and line breaks so the step
/// stays on one line.
pub fn quote(arg: &str) -> String {
    let mut out = String::with_capacity(arg.len() + 2);
    out.push('"');
    for c in arg.chars() {
        match c {
            '"' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Recognize one step line (`Given ...`, `When ...`, `Then ...`, `And ...`).
///
/// Returns `None` for lines that are not steps or match no known phrase.
pub fn parse_step(line: &str) -> Option<ParsedStep> {
    let line = line.trim();
    let (keyword, text) = line.split_once(' ')?;

    match keyword {
        "Then" => return Some(ParsedStep::Assertion(text.to_string())),
        "Given" | "When" | "And" => {}
        _ => return None,
    }

    StepPattern::ALL.iter().find_map(|pattern| {
        let args = match_expression(pattern.expression(), text)?;
        let step = match (pattern, args.as_slice()) {
            (StepPattern::OnPage, [page]) => ParsedStep::OnPage { page: page.clone() },
            (StepPattern::TypeInto, [text, field]) => ParsedStep::TypeInto {
                text: text.clone(),
                field: field.clone(),
            },
            (StepPattern::ClickButton, [label]) => ParsedStep::ClickButton { label: label.clone() },
            (StepPattern::ClickLink, [label]) => ParsedStep::ClickLink { label: label.clone() },
            _ => return None,
        };
        Some(step)
    })
}

fn match_expression(expression: &str, text: &str) -> Option<Vec<String>> {
    let mut args = Vec::new();
    let mut rest = text;
    let mut parts = expression.split("{string}").peekable();

    while let Some(literal) = parts.next() {
        rest = rest.strip_prefix(literal)?;
        if parts.peek().is_some() {
            let (arg, remainder) = take_quoted(rest)?;
            args.push(arg);
            rest = remainder;
        }
    }

    rest.is_empty().then_some(args)
}

fn take_quoted(s: &str) -> Option<(String, &str)> {
    let body = s.strip_prefix('"')?;
    let mut arg = String::new();
    let mut chars = body.char_indices();

    while let Some((i, c)) = chars.next() {
        match c {
            '\\' => {
                let (_, escaped) = chars.next()?;
                arg.push(match escaped {
                    'n' => '\n',
                    'r' => '\r',
                    other => other,
                });
            }
            '"' => return Some((arg, &body[i + 1..])),
            _ => arg.push(c),
        }
    }

    None
}
