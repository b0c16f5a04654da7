//! The builtin reference table.
//!
//! One literal definition, constructed exactly once behind the
//! `Dataset::builtin()` static. Categories and items are declared in
//! display order; the counts in the sidebar and the facet totals all
//! derive from this table.

use super::ItemKind as K;
use super::{Category, Dataset, Item};

pub(super) fn build() -> Dataset {
    Dataset {
        categories: vec![
            conversation_management(),
            configuration_settings(),
            development_tools(),
            administration(),
            utilities_information(),
            general_controls(),
            input_methods(),
            quick_prefixes(),
            vim_navigation(),
            vim_editing(),
            cli_session(),
            cli_model_behavior(),
            cli_system_prompts(),
            cli_tools_permissions(),
            cli_output_debug(),
            cli_mcp_advanced(),
            hooks(),
            modes_features(),
            custom_commands(),
        ],
    }
}

fn conversation_management() -> Category {
    Category::new(
        "Conversation Management",
        "◆",
        "Commands for managing conversation history and context",
        vec![
            Item::new(
                "/clear",
                K::Slash,
                "Remove conversation history and start fresh",
                "/clear",
                &["history", "reset", "clean"],
            ),
            Item::new(
                "/compact [instructions]",
                K::Slash,
                "Compress conversation with optional focus; helps manage token usage",
                "/compact focus on the authentication code",
                &["tokens", "compress", "context"],
            ),
            Item::new(
                "/export [filename]",
                K::Slash,
                "Save conversation to file or clipboard",
                "/export ~/my-session.md",
                &["save", "backup", "export"],
            ),
            Item::new(
                "/resume",
                K::Slash,
                "Continue a previous conversation session",
                "/resume",
                &["continue", "session", "restore"],
            ),
            Item::new(
                "/rewind",
                K::Slash,
                "Undo conversation changes or code edits",
                "/rewind",
                &["undo", "rollback", "restore"],
            ),
            Item::new(
                "Esc + Esc",
                K::Keyboard,
                "Rewind code and conversation to prior state",
                "Press Escape twice quickly",
                &["undo", "rewind", "quick"],
            ),
        ],
    )
}

fn configuration_settings() -> Category {
    Category::new(
        "Configuration & Settings",
        "≡",
        "Commands for configuring Claude Code behavior",
        vec![
            Item::new(
                "/config",
                K::Slash,
                "Open Settings interface (Config tab)",
                "/config",
                &["settings", "preferences", "options"],
            ),
            Item::new(
                "/status",
                K::Slash,
                "Display version, model, account, and connectivity info",
                "/status",
                &["info", "version", "account"],
            ),
            Item::new(
                "/model",
                K::Slash,
                "Switch AI models (aliases: sonnet, opus, or full name)",
                "/model opus",
                &["model", "switch", "ai"],
            ),
            Item::new(
                "/output-style [style]",
                K::Slash,
                "Adjust output formatting style",
                "/output-style concise",
                &["format", "output", "style"],
            ),
            Item::new(
                "/settings",
                K::Slash,
                "Manage configuration options",
                "/settings",
                &["config", "preferences", "options"],
            ),
            Item::new(
                "/vim",
                K::Slash,
                "Enable Vim editor mode for input",
                "/vim",
                &["vim", "editor", "mode"],
            ),
            Item::new(
                "Shift+Tab or Alt+M",
                K::Keyboard,
                "Switch permission modes",
                "Press Shift+Tab to cycle modes",
                &["permissions", "mode", "switch"],
            ),
            Item::new(
                "Tab",
                K::Keyboard,
                "Toggle extended thinking feature",
                "Press Tab before sending prompt",
                &["thinking", "extended", "analysis"],
            ),
        ],
    )
}

fn development_tools() -> Category {
    Category::new(
        "Development Tools",
        "λ",
        "Commands for code development and review",
        vec![
            Item::new(
                "/review",
                K::Slash,
                "Request code review for current changes",
                "/review",
                &["code", "review", "audit"],
            ),
            Item::new(
                "/security-review",
                K::Slash,
                "Audit pending changes for security vulnerabilities",
                "/security-review",
                &["security", "audit", "vulnerabilities"],
            ),
            Item::new(
                "/sandbox",
                K::Slash,
                "Enable isolated bash execution with filesystem/network restrictions",
                "/sandbox",
                &["sandbox", "isolated", "safe"],
            ),
            Item::new(
                "/init",
                K::Slash,
                "Initialize project with CLAUDE.md guide",
                "/init",
                &["init", "project", "setup"],
            ),
            Item::new(
                "/memory",
                K::Slash,
                "Edit CLAUDE.md memory files for persistent context",
                "/memory",
                &["memory", "context", "persistent"],
            ),
        ],
    )
}

fn administration() -> Category {
    Category::new(
        "Administration",
        "†",
        "Commands for managing permissions, plugins, and integrations",
        vec![
            Item::new(
                "/permissions",
                K::Slash,
                "View/update access controls and tool permissions",
                "/permissions",
                &["access", "permissions", "security"],
            ),
            Item::new(
                "/mcp",
                K::Slash,
                "Manage MCP server connections and OAuth",
                "/mcp list",
                &["mcp", "servers", "oauth"],
            ),
            Item::new(
                "/plugin",
                K::Slash,
                "Install and manage plugins",
                "/plugin install my-plugin",
                &["plugin", "install", "extend"],
            ),
            Item::new(
                "/hooks",
                K::Slash,
                "Configure tool event handlers and automation",
                "/hooks",
                &["hooks", "automation", "events"],
            ),
            Item::new(
                "/ide",
                K::Slash,
                "Check IDE integration status",
                "/ide",
                &["ide", "integration", "editor"],
            ),
        ],
    )
}

fn utilities_information() -> Category {
    Category::new(
        "Utilities & Information",
        "§",
        "Helpful utility commands and information display",
        vec![
            Item::new(
                "/help",
                K::Slash,
                "Display available commands and help information",
                "/help",
                &["help", "commands", "info"],
            ),
            Item::new(
                "/context",
                K::Slash,
                "Visualize token usage as colored grid",
                "/context",
                &["tokens", "context", "usage"],
            ),
            Item::new(
                "/cost",
                K::Slash,
                "Show token statistics and cost information",
                "/cost",
                &["cost", "tokens", "stats"],
            ),
            Item::new(
                "/doctor",
                K::Slash,
                "Verify installation health and diagnose issues",
                "/doctor",
                &["health", "diagnose", "check"],
            ),
            Item::new(
                "/usage",
                K::Slash,
                "Display plan limits and rate status",
                "/usage",
                &["usage", "limits", "rate"],
            ),
        ],
    )
}

fn general_controls() -> Category {
    Category::new(
        "General Controls",
        "»",
        "Essential keyboard shortcuts for general control",
        vec![
            Item::new(
                "Ctrl+C",
                K::Keyboard,
                "Cancel current input or generation",
                "Press during long operation",
                &["cancel", "stop", "interrupt"],
            ),
            Item::new(
                "Ctrl+D",
                K::Keyboard,
                "Exit the Claude Code session",
                "Press to quit",
                &["exit", "quit", "close"],
            ),
            Item::new(
                "Ctrl+L",
                K::Keyboard,
                "Clear terminal screen",
                "Press to clear display",
                &["clear", "screen", "terminal"],
            ),
            Item::new(
                "Ctrl+O",
                K::Keyboard,
                "Toggle verbose output mode",
                "Press to see more details",
                &["verbose", "debug", "output"],
            ),
            Item::new(
                "Ctrl+R",
                K::Keyboard,
                "Access reverse command history search",
                "Press and type to search history",
                &["history", "search", "reverse"],
            ),
            Item::new(
                "Ctrl+V / Alt+V",
                K::Keyboard,
                "Paste images from clipboard (Ctrl+V on Mac/Linux, Alt+V on Windows)",
                "Copy image, then paste",
                &["paste", "image", "clipboard"],
            ),
            Item::new(
                "Ctrl+B",
                K::Keyboard,
                "Background long-running processes (Tmux: press twice)",
                "Press during long task",
                &["background", "process", "tmux"],
            ),
            Item::new(
                "Up/Down arrows",
                K::Keyboard,
                "Navigate through previous inputs",
                "Press Up to see last command",
                &["history", "navigate", "previous"],
            ),
        ],
    )
}

fn input_methods() -> Category {
    Category::new(
        "Input Methods",
        "¶",
        "Methods for entering and formatting input",
        vec![
            Item::new(
                "\\ + Enter",
                K::Keyboard,
                "Continue input on next line (all terminals)",
                "Type \\ then press Enter",
                &["multiline", "continue", "input"],
            ),
            Item::new(
                "Option+Enter",
                K::Keyboard,
                "Continue input on next line (macOS default)",
                "Hold Option and press Enter",
                &["multiline", "macos", "input"],
            ),
            Item::new(
                "Shift+Enter",
                K::Keyboard,
                "Continue input on next line (after /terminal-setup)",
                "Hold Shift and press Enter",
                &["multiline", "newline", "input"],
            ),
            Item::new(
                "Ctrl+J",
                K::Keyboard,
                "Line feed character (all terminals)",
                "Press for new line",
                &["newline", "linefeed", "input"],
            ),
        ],
    )
}

fn quick_prefixes() -> Category {
    Category::new(
        "Quick Prefixes",
        "◈",
        "Special prefix characters for quick actions",
        vec![
            Item::new(
                "# (hash prefix)",
                K::Prefix,
                "Add memory to CLAUDE.md file",
                "# Remember to use TypeScript",
                &["memory", "note", "remember"],
            ),
            Item::new(
                "/ (slash prefix)",
                K::Prefix,
                "Execute slash commands",
                "/help",
                &["command", "slash", "execute"],
            ),
            Item::new(
                "! (bang prefix)",
                K::Prefix,
                "Run bash directly without Claude interpretation",
                "!git status",
                &["bash", "shell", "direct"],
            ),
            Item::new(
                "@ (at prefix)",
                K::Prefix,
                "Trigger file path autocomplete",
                "@src/components/Button.tsx",
                &["file", "path", "autocomplete"],
            ),
        ],
    )
}

fn vim_navigation() -> Category {
    Category::new(
        "Vim Mode - Navigation",
        "→",
        "Vim-style navigation when /vim is enabled",
        vec![
            Item::new(
                "h / j / k / l",
                K::Vim,
                "Move left / down / up / right",
                "Press h to move left",
                &["move", "cursor", "navigation"],
            ),
            Item::new(
                "w",
                K::Vim,
                "Jump to next word",
                "Press w to skip word",
                &["word", "next", "jump"],
            ),
            Item::new(
                "e",
                K::Vim,
                "Jump to word end",
                "Press e to reach word end",
                &["word", "end", "jump"],
            ),
            Item::new(
                "b",
                K::Vim,
                "Jump to previous word",
                "Press b to go back a word",
                &["word", "previous", "back"],
            ),
            Item::new(
                "0 (zero)",
                K::Vim,
                "Jump to line start",
                "Press 0 to go to beginning",
                &["line", "start", "beginning"],
            ),
            Item::new(
                "$",
                K::Vim,
                "Jump to line end",
                "Press $ to go to end",
                &["line", "end", "dollar"],
            ),
            Item::new(
                "gg",
                K::Vim,
                "Jump to document start",
                "Press gg to go to top",
                &["document", "start", "top"],
            ),
            Item::new(
                "G",
                K::Vim,
                "Jump to document end",
                "Press G to go to bottom",
                &["document", "end", "bottom"],
            ),
        ],
    )
}

fn vim_editing() -> Category {
    Category::new(
        "Vim Mode - Editing",
        "✎",
        "Vim-style editing commands when /vim is enabled",
        vec![
            Item::new(
                "i / I",
                K::Vim,
                "Insert mode at cursor / at line start",
                "Press i to start inserting",
                &["insert", "mode", "cursor"],
            ),
            Item::new(
                "a / A",
                K::Vim,
                "Insert mode after cursor / at line end",
                "Press a to append",
                &["append", "insert", "after"],
            ),
            Item::new(
                "o / O",
                K::Vim,
                "New line below / above and insert",
                "Press o for new line below",
                &["newline", "insert", "open"],
            ),
            Item::new(
                "x",
                K::Vim,
                "Delete character at cursor",
                "Press x to delete char",
                &["delete", "character", "remove"],
            ),
            Item::new(
                "dd",
                K::Vim,
                "Delete entire line",
                "Press dd to delete line",
                &["delete", "line", "cut"],
            ),
            Item::new(
                "dw / de / db",
                K::Vim,
                "Delete word / to word end / to word start",
                "Press dw to delete word",
                &["delete", "word", "cut"],
            ),
            Item::new(
                "cc / C",
                K::Vim,
                "Change entire line / from cursor to end",
                "Press cc to replace line",
                &["change", "line", "replace"],
            ),
            Item::new(
                ".",
                K::Vim,
                "Repeat last action",
                "Press . to repeat",
                &["repeat", "redo", "action"],
            ),
            Item::new(
                "Esc",
                K::Vim,
                "Return to NORMAL mode",
                "Press Esc to exit insert",
                &["normal", "mode", "escape"],
            ),
        ],
    )
}

fn cli_session() -> Category {
    Category::new(
        "CLI Flags - Session",
        "○",
        "Command line flags for session management",
        vec![
            Item::new(
                "--continue, -c",
                K::Flag,
                "Load most recent conversation",
                "claude -c",
                &["continue", "resume", "session"],
            ),
            Item::new(
                "--resume, -r",
                K::Flag,
                "Resume specific session by ID",
                "claude -r \"abc123\" \"query\"",
                &["resume", "session", "id"],
            ),
            Item::new(
                "--session-id",
                K::Flag,
                "Use specific UUID for conversation",
                "claude --session-id \"my-uuid\"",
                &["session", "uuid", "id"],
            ),
            Item::new(
                "--fork-session",
                K::Flag,
                "Create new ID when resuming (branch off)",
                "claude --fork-session -c",
                &["fork", "branch", "session"],
            ),
        ],
    )
}

fn cli_model_behavior() -> Category {
    Category::new(
        "CLI Flags - Model & Behavior",
        "●",
        "Command line flags for model and behavior control",
        vec![
            Item::new(
                "--model",
                K::Flag,
                "Set model (aliases: sonnet, opus, or full name)",
                "claude --model opus",
                &["model", "ai", "switch"],
            ),
            Item::new(
                "--agent",
                K::Flag,
                "Specify custom agent to use",
                "claude --agent \"my-agent\"",
                &["agent", "custom", "specify"],
            ),
            Item::new(
                "--agents",
                K::Flag,
                "Define subagents dynamically via JSON",
                "claude --agents '{\"name\": {...}}'",
                &["agents", "subagents", "json"],
            ),
            Item::new(
                "--print, -p",
                K::Flag,
                "Print response without interactive mode; exits after",
                "claude -p \"explain this code\"",
                &["print", "non-interactive", "output"],
            ),
            Item::new(
                "--max-turns",
                K::Flag,
                "Limit agentic turns (non-interactive only)",
                "claude --max-turns 5 -p \"task\"",
                &["turns", "limit", "agentic"],
            ),
        ],
    )
}

fn cli_system_prompts() -> Category {
    Category::new(
        "CLI Flags - System Prompts",
        "□",
        "Command line flags for customizing system prompts",
        vec![
            Item::new(
                "--system-prompt",
                K::Flag,
                "Replace entire default prompt (non-interactive only)",
                "claude --system-prompt \"You are a Python expert\"",
                &["system", "prompt", "replace"],
            ),
            Item::new(
                "--system-prompt-file",
                K::Flag,
                "Load system prompt from file",
                "claude --system-prompt-file ./prompt.txt",
                &["system", "prompt", "file"],
            ),
            Item::new(
                "--append-system-prompt",
                K::Flag,
                "Add to default prompt (recommended approach)",
                "claude --append-system-prompt \"Focus on security\"",
                &["append", "prompt", "add"],
            ),
        ],
    )
}

fn cli_tools_permissions() -> Category {
    Category::new(
        "CLI Flags - Tools & Permissions",
        "■",
        "Command line flags for tool and permission control",
        vec![
            Item::new(
                "--tools",
                K::Flag,
                "Specify available built-in tools list",
                "claude --tools Read,Write,Bash",
                &["tools", "list", "available"],
            ),
            Item::new(
                "--allowedTools",
                K::Flag,
                "Permit tools without prompting",
                "claude --allowedTools Read,Grep",
                &["allowed", "permit", "auto"],
            ),
            Item::new(
                "--disallowedTools",
                K::Flag,
                "Block tools without prompting",
                "claude --disallowedTools Bash",
                &["blocked", "disallow", "prevent"],
            ),
            Item::new(
                "--permission-mode",
                K::Flag,
                "Begin in specified permission mode",
                "claude --permission-mode default",
                &["permission", "mode", "security"],
            ),
            Item::new(
                "--dangerously-skip-permissions",
                K::Flag,
                "Skip permission prompts (use with caution)",
                "claude --dangerously-skip-permissions",
                &["skip", "dangerous", "permissions"],
            ),
        ],
    )
}

fn cli_output_debug() -> Category {
    Category::new(
        "CLI Flags - Output & Debug",
        "▣",
        "Command line flags for output format and debugging",
        vec![
            Item::new(
                "--output-format",
                K::Flag,
                "Choose format: text, json, stream-json",
                "claude --output-format json -p \"query\"",
                &["output", "format", "json"],
            ),
            Item::new(
                "--input-format",
                K::Flag,
                "Specify input format",
                "claude --input-format json",
                &["input", "format", "parse"],
            ),
            Item::new(
                "--verbose",
                K::Flag,
                "Enable verbose logging",
                "claude --verbose",
                &["verbose", "logging", "debug"],
            ),
            Item::new(
                "--debug",
                K::Flag,
                "Enable debug mode with optional filtering",
                "claude --debug",
                &["debug", "diagnostics", "trace"],
            ),
            Item::new(
                "--json-schema",
                K::Flag,
                "Get validated JSON output matching schema",
                "claude --json-schema '{...}' -p \"query\"",
                &["json", "schema", "validate"],
            ),
        ],
    )
}

fn cli_mcp_advanced() -> Category {
    Category::new(
        "CLI Flags - MCP & Advanced",
        "◉",
        "Command line flags for MCP and advanced configuration",
        vec![
            Item::new(
                "--mcp-config",
                K::Flag,
                "Load MCP servers from config files",
                "claude --mcp-config ./mcp.json",
                &["mcp", "config", "servers"],
            ),
            Item::new(
                "--strict-mcp-config",
                K::Flag,
                "Use only specified MCP configuration",
                "claude --strict-mcp-config --mcp-config ./mcp.json",
                &["mcp", "strict", "only"],
            ),
            Item::new(
                "--add-dir",
                K::Flag,
                "Add working directories for access",
                "claude --add-dir /path/to/dir",
                &["directory", "add", "access"],
            ),
            Item::new(
                "--settings",
                K::Flag,
                "Load settings from JSON file or string",
                "claude --settings ~/.claude/settings.json",
                &["settings", "config", "json"],
            ),
            Item::new(
                "--fallback-model",
                K::Flag,
                "Auto-fallback when primary model overloaded",
                "claude --fallback-model sonnet",
                &["fallback", "model", "backup"],
            ),
            Item::new(
                "--version, -v",
                K::Flag,
                "Output version number",
                "claude --version",
                &["version", "info", "about"],
            ),
        ],
    )
}

fn hooks() -> Category {
    Category::new(
        "Hooks",
        "¤",
        "Event hooks for automation and custom behavior",
        vec![
            Item::new(
                "PreToolUse",
                K::Hook,
                "Triggers after Claude creates tool parameters but before processing",
                "Allow, deny, or ask for permission before tool runs",
                &["before", "tool", "validate"],
            ),
            Item::new(
                "PostToolUse",
                K::Hook,
                "Triggers after tool completes successfully",
                "Log tool results or trigger follow-up actions",
                &["after", "tool", "complete"],
            ),
            Item::new(
                "PermissionRequest",
                K::Hook,
                "Triggers when permission dialogs are shown",
                "Auto-approve or deny permissions programmatically",
                &["permission", "dialog", "auto"],
            ),
            Item::new(
                "UserPromptSubmit",
                K::Hook,
                "Triggers when users submit prompts, before Claude processes",
                "Validate input or inject context",
                &["prompt", "submit", "validate"],
            ),
            Item::new(
                "Notification",
                K::Hook,
                "Triggers when Claude sends notifications",
                "Filter by type like 'permission_prompt'",
                &["notification", "alert", "filter"],
            ),
            Item::new(
                "Stop",
                K::Hook,
                "Triggers when main agent finishes responding",
                "Force continuation or perform cleanup",
                &["stop", "finish", "end"],
            ),
            Item::new(
                "SubagentStop",
                K::Hook,
                "Triggers when subagent (Task tool) finishes",
                "Evaluate task completion intelligently",
                &["subagent", "task", "complete"],
            ),
            Item::new(
                "SessionStart",
                K::Hook,
                "Triggers at session initialization or resume",
                "Load development context, set env vars",
                &["session", "start", "init"],
            ),
            Item::new(
                "SessionEnd",
                K::Hook,
                "Triggers when session terminates",
                "Cleanup and logging tasks",
                &["session", "end", "cleanup"],
            ),
        ],
    )
}

fn modes_features() -> Category {
    Category::new(
        "Modes & Features",
        "★",
        "Special operational modes and features",
        vec![
            Item::new(
                "Plan Mode",
                K::Mode,
                "Strategic task planning and project analysis mode",
                "Activated automatically for complex planning tasks",
                &["plan", "strategy", "analysis"],
            ),
            Item::new(
                "Build Mode",
                K::Mode,
                "Code generation and development tasks mode",
                "Activated for implementation work",
                &["build", "code", "develop"],
            ),
            Item::new(
                "Sandbox Mode",
                K::Mode,
                "Isolated bash with filesystem/network restrictions",
                "/sandbox to enable",
                &["sandbox", "isolated", "restricted"],
            ),
            Item::new(
                "Extended Thinking",
                K::Mode,
                "Deeper analysis before responding",
                "Press Tab before sending prompt",
                &["thinking", "deep", "analysis"],
            ),
            Item::new(
                "Verbose Output",
                K::Mode,
                "Detailed logging and output display",
                "Ctrl+O to toggle",
                &["verbose", "detailed", "logging"],
            ),
            Item::new(
                "Checkpointing",
                K::Feature,
                "Automatically track and rewind Claude's edits",
                "Use Esc+Esc to rewind",
                &["checkpoint", "rewind", "undo"],
            ),
            Item::new(
                "Memory Management",
                K::Feature,
                "Persistent context via CLAUDE.md files",
                "/memory to edit, # prefix to add",
                &["memory", "persistent", "context"],
            ),
            Item::new(
                "MCP Server Support",
                K::Feature,
                "Connect external tools and APIs via Model Context Protocol",
                "/mcp to manage connections",
                &["mcp", "external", "api"],
            ),
        ],
    )
}

fn custom_commands() -> Category {
    Category::new(
        "Custom Commands",
        "▲",
        "Creating and using custom slash commands",
        vec![
            Item::new(
                "Project Commands",
                K::Custom,
                "Shared commands in .claude/commands/ directory",
                "Create .claude/commands/deploy.md",
                &["project", "team", "shared"],
            ),
            Item::new(
                "Personal Commands",
                K::Custom,
                "Personal commands in ~/.claude/commands/ directory",
                "Create ~/.claude/commands/myhelper.md",
                &["personal", "user", "global"],
            ),
            Item::new(
                "$ARGUMENTS",
                K::Custom,
                "Capture all arguments passed to custom command",
                "/mycommand arg1 arg2 -> $ARGUMENTS = 'arg1 arg2'",
                &["arguments", "all", "capture"],
            ),
            Item::new(
                "$1, $2, $3",
                K::Custom,
                "Access specific positional arguments",
                "/mycommand first second -> $1='first', $2='second'",
                &["positional", "arguments", "numbered"],
            ),
            Item::new(
                "Frontmatter",
                K::Custom,
                "Metadata for custom commands (allowed-tools, description, model)",
                "---\\nallowed-tools: Read,Write\\ndescription: My helper\\n---",
                &["metadata", "config", "yaml"],
            ),
        ],
    )
}
