//! Tool and language definitions shaped like a real `config.json`.

use serde_json::{Value, json};

pub fn cursor_tool() -> Value {
    json!({
        "name": "Cursor",
        "outputDir": ".cursor/rules",
        "fileExtension": ".mdc",
        "useFrontmatter": true,
        "supportsGlobs": true,
        "supportsSubfolders": true
    })
}

pub fn claude_tool() -> Value {
    json!({
        "name": "Claude",
        "outputFile": "CLAUDE.md",
        "outputDir": ".claude/skills",
        "fileExtension": ".md",
        "skillFilename": "SKILL.md",
        "useFrontmatter": false,
        "supportsGlobs": false,
        "supportsSubfolders": true
    })
}

pub fn copilot_tool() -> Value {
    json!({
        "name": "GitHub Copilot",
        "outputFile": ".github/copilot-instructions.md",
        "fileExtension": ".md",
        "useFrontmatter": false,
        "supportsGlobs": false,
        "supportsSubfolders": false
    })
}

pub fn general_language() -> Value {
    json!({
        "name": "General",
        "globs": "*",
        "alwaysApply": true,
        "description": "Rules for every project",
        "files": ["architecture", "code-style"]
    })
}

/// Python with files declared out of precedence order, two frameworks,
/// one structure, and a permanent plus an on-demand process.
pub fn python_language() -> Value {
    json!({
        "name": "Python",
        "globs": "*.py",
        "alwaysApply": false,
        "description": "Python rules",
        "files": ["testing", "code-style", "architecture"],
        "frameworks": {
            "django": {
                "name": "Django",
                "file": "django",
                "category": "Web Framework",
                "description": "Django web framework",
                "structures": {
                    "modular": {
                        "name": "Modular",
                        "file": "django-modular",
                        "description": "Feature-based apps"
                    }
                }
            },
            "fastapi": {
                "name": "FastAPI",
                "file": "fastapi",
                "category": "Web Framework",
                "description": "FastAPI services"
            }
        },
        "processes": {
            "ci-cd": {
                "name": "CI/CD",
                "file": "ci-cd-github-actions",
                "description": "Pipeline upkeep",
                "type": "permanent"
            },
            "database-migrations": {
                "name": "Database Migrations",
                "file": "database-migrations",
                "description": "One-time migration setup",
                "type": "ondemand"
            }
        }
    })
}

pub fn typescript_language() -> Value {
    json!({
        "name": "TypeScript",
        "globs": "*.ts",
        "alwaysApply": false,
        "description": "TypeScript rules",
        "files": ["architecture", "code-style"],
        "frameworks": {
            "react": {
                "name": "React",
                "file": "react",
                "category": "UI",
                "description": "React components"
            }
        }
    })
}
