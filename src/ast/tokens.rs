#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Raw template text outside any `{ ... }` block
    ///
    /// Passed through to the output untouched by evaluation.
    ///
    /// # Examples
    /// ```text
    /// kind is {.kind}
    /// ^^^^^^^^
    /// ```
    Text(String),

    // Literals
    /// Integer literal
    ///
    /// # Examples
    /// ```text
    /// 42
    /// -1
    /// ```
    Integer(i64),

    /// Floating-point literal
    ///
    /// # Examples
    /// ```text
    /// 3.14
    /// -0.5
    /// ```
    Float(f64),

    /// Quoted string, single or double quotes
    ///
    /// # Examples
    /// ```text
    /// ['first-name']
    /// [?(@.kind == "Pod")]
    /// ```
    String(String),

    /// Boolean keyword (`true` / `false`)
    Boolean(bool),

    /// Bare word: a field name after a dot, or a keyword-like
    /// identifier such as `range` / `end` in leading position
    ///
    /// # Examples
    /// ```text
    /// {range .items[*]}{.name}{end}
    /// ```
    Identifier(String),

    // Markers
    /// Root document marker
    ///
    /// # Examples
    /// ```text
    /// {$.items}
    /// ```
    Dollar,

    /// Current object marker, used inside filter operands
    ///
    /// # Examples
    /// ```text
    /// [?(@.price < 10)]
    /// ```
    At,

    /// Step back to the enclosing context
    ///
    /// # Examples
    /// ```text
    /// {.items[?(@.ok)].^.label}
    /// ```
    Caret,

    // Operators
    /// Comparison operator, carried verbatim as scanned
    ///
    /// The lexer takes a maximal run of operator characters and keeps the
    /// text; it holds no table of legal spellings.
    ///
    /// # Examples
    /// ```text
    /// ==   !=   <=   =~
    /// ```
    Operator(String),

    // Delimiters
    /// Opens an expression block
    LBrace,

    /// Closes an expression block
    RBrace,

    /// Child step
    Dot,

    /// Recursive descent
    DotDot,

    /// Wildcard
    Star,

    /// Opens a bracket selector
    LBracket,

    /// Closes a bracket selector
    RBracket,

    /// Opens a filter predicate body
    LParen,

    /// Closes a filter predicate body
    RParen,

    /// Starts a filter selector (`[?(...)]`)
    Question,

    /// Separates union branches
    Comma,

    /// Separates slice parameters
    Colon,

    /// End of input
    Eof,
}
