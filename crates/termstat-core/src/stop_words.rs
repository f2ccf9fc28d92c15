/// Terms excluded from counting unless the caller builds an empty set.
///
/// Language keywords and builtins, throwaway variable names, and the names of
/// ubiquitous standard packages. None of these say anything about the domain
/// a codebase models.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    // Language keywords
    "err", "error", "string", "int", "bool", "func", "return", "if", "else", "for", "range",
    "break", "nil",
    // Common variable names
    "ctx", "cmd", "pkg", "ptr", "src", "dst", "buf", "resp", "req", "val", "vars", "params",
    "args",
    // Common package names
    "fmt", "os", "net", "http", "json", "io", "ioutil", "sync", "context", "bytes", "strings",
    "assert", "path", "test", "file",
    // Type-related terms
    "interface", "struct", "type", "map", "slice", "chan",
    // Common method and variable names
    "init", "new", "make", "len", "cap", "append", "close", "delete", "name", "config", "get",
    "value", "run", "equal", "dir",
    // CLI plumbing
    "cobra", "command",
];
