//! Built-in template sources
//!
//! Each entry is plain data: a (language, code type) key and a template
//! string using the placeholders understood by [`super::placeholder`].

use crate::model::{CodeType, Language};

pub(super) const BUILTIN_TEMPLATES: &[(Language, CodeType, &str)] = &[
    (Language::JavaScript, CodeType::Function, JS_FUNCTION),
    (Language::JavaScript, CodeType::Class, JS_CLASS),
    (Language::JavaScript, CodeType::Api, JS_API),
    (Language::JavaScript, CodeType::Component, JS_COMPONENT),
    (Language::JavaScript, CodeType::Test, JS_TEST),
    (Language::JavaScript, CodeType::Config, JS_CONFIG),
    (Language::Python, CodeType::Function, PY_FUNCTION),
    (Language::Python, CodeType::Class, PY_CLASS),
    (Language::Python, CodeType::Api, PY_API),
    (Language::Python, CodeType::Algorithm, PY_ALGORITHM),
    (Language::Python, CodeType::Test, PY_TEST),
    (Language::Python, CodeType::Script, PY_SCRIPT),
    (Language::Java, CodeType::Function, JAVA_FUNCTION),
    (Language::Java, CodeType::Class, JAVA_CLASS),
    (Language::Java, CodeType::Api, JAVA_API),
    (Language::TypeScript, CodeType::Function, TS_FUNCTION),
    (Language::TypeScript, CodeType::Class, TS_CLASS),
    (Language::TypeScript, CodeType::Component, TS_COMPONENT),
    (Language::TypeScript, CodeType::Api, TS_API),
    (Language::Go, CodeType::Function, GO_FUNCTION),
    (Language::Go, CodeType::Api, GO_API),
    (Language::Rust, CodeType::Function, RUST_FUNCTION),
    (Language::Rust, CodeType::Class, RUST_STRUCT),
    (Language::Rust, CodeType::Algorithm, RUST_ALGORITHM),
    (Language::Cpp, CodeType::Function, CPP_FUNCTION),
    (Language::Cpp, CodeType::Class, CPP_CLASS),
    (Language::CSharp, CodeType::Class, CSHARP_CLASS),
    (Language::CSharp, CodeType::Api, CSHARP_API),
];

/// Used when no exact (language, code type) entry exists.
///
/// `{comment}`, `{language}` and `{code_type}` are supplied by the renderer.
pub(crate) const FALLBACK_TEMPLATE: &str = r#"{comment} Generated {language} {code_type}
{comment} Description: {description}
{comment} No dedicated template exists for this combination; starting from a generic skeleton.

{comment} Implementation for: {description}
"#;

const JS_FUNCTION: &str = r#"// Generated function: {description}
function {camel_name}(input) {
  // Implementation based on: {description}
  const result = input;
  return result;
}

module.exports = { {camel_name} };
"#;

const JS_CLASS: &str = r#"// Generated class: {description}
class {pascal_name} {
  constructor(options = {}) {
    this.options = options;
  }

  execute() {
    // Implementation based on: {description}
    return this.options;
  }
}

module.exports = {pascal_name};
"#;

const JS_API: &str = r#"// Generated API endpoint: {description}
const express = require('express');
const router = express.Router();

router.post('/{kebab_name}', async (req, res) => {
  try {
    // Implementation based on: {description}
    const data = req.body;
    res.json({ success: true, data });
  } catch (error) {
    res.status(500).json({ success: false, error: error.message });
  }
});

module.exports = router;
"#;

const JS_COMPONENT: &str = r#"// Generated component: {description}
import React, { useState } from 'react';

export default function {pascal_name}({ title = '{pascal_name}' }) {
  const [state, setState] = useState(null);

  // Implementation based on: {description}
  return (
    <div className="{kebab_name}">
      <h2>{title}</h2>
      <button onClick={() => setState(Date.now())}>Update</button>
      {state && <p>Last updated: {state}</p>}
    </div>
  );
}
"#;

const JS_TEST: &str = r#"// Generated test: {description}
const assert = require('assert');

describe('{description}', () => {
  it('should behave as described', () => {
    // Arrange, act and assert for: {description}
    const expected = true;
    assert.strictEqual(expected, true);
  });
});
"#;

const JS_CONFIG: &str = r#"// Generated configuration: {description}
module.exports = {
  name: '{kebab_name}',
  environment: process.env.NODE_ENV || 'development',
  port: Number(process.env.PORT) || 3000,
  logging: {
    level: 'info',
  },
};
"#;

const PY_FUNCTION: &str = r#"# Generated function: {description}
def {snake_name}(data):
    """{description}"""
    # Implementation based on the description
    result = data
    return result
"#;

const PY_CLASS: &str = r#"# Generated class: {description}
class {pascal_name}:
    """{description}"""

    def __init__(self, **options):
        self.options = options

    def execute(self):
        # Implementation based on the description
        return self.options
"#;

const PY_API: &str = r#"# Generated API endpoint: {description}
from fastapi import APIRouter, HTTPException

router = APIRouter()


@router.post("/{kebab_name}")
async def {snake_name}(payload: dict):
    """{description}"""
    try:
        return {"success": True, "data": payload}
    except Exception as exc:
        raise HTTPException(status_code=500, detail=str(exc))
"#;

const PY_ALGORITHM: &str = r#"# Generated algorithm: {description}
def {snake_name}(items):
    """{description}

    Runs in O(n log n) time.
    """
    if not items:
        return []
    ordered = sorted(items)
    return ordered
"#;

const PY_TEST: &str = r#"# Generated test: {description}
import unittest


class Test{pascal_name}(unittest.TestCase):
    def test_{snake_name}(self):
        """{description}"""
        expected = True
        self.assertTrue(expected)


if __name__ == "__main__":
    unittest.main()
"#;

const PY_SCRIPT: &str = r#"#!/usr/bin/env python3
# Generated script: {description}
import argparse


def main():
    parser = argparse.ArgumentParser(description="{snake_name}")
    parser.add_argument("--verbose", action="store_true")
    args = parser.parse_args()
    if args.verbose:
        print("Running {snake_name}")


if __name__ == "__main__":
    main()
"#;

const JAVA_FUNCTION: &str = r#"// Generated function: {description}
public class {pascal_name}Util {
    public static Object {camel_name}(Object input) {
        // Implementation based on: {description}
        return input;
    }
}
"#;

const JAVA_CLASS: &str = r#"// Generated class: {description}
public class {pascal_name} {
    private final String name;

    public {pascal_name}(String name) {
        this.name = name;
    }

    public String getName() {
        return name;
    }

    public void execute() {
        // Implementation based on: {description}
    }
}
"#;

const JAVA_API: &str = r#"// Generated API endpoint: {description}
import org.springframework.http.ResponseEntity;
import org.springframework.web.bind.annotation.*;

@RestController
@RequestMapping("/api")
public class {pascal_name}Controller {
    @PostMapping("/{kebab_name}")
    public ResponseEntity<Object> {camel_name}(@RequestBody Object payload) {
        // Implementation based on: {description}
        return ResponseEntity.ok(payload);
    }
}
"#;

const TS_FUNCTION: &str = r#"// Generated function: {description}
export function {camel_name}<T>(input: T): T {
  // Implementation based on: {description}
  return input;
}
"#;

const TS_CLASS: &str = r#"// Generated class: {description}
export interface {pascal_name}Options {
  name?: string;
}

export class {pascal_name} {
  constructor(private readonly options: {pascal_name}Options = {}) {}

  execute(): {pascal_name}Options {
    // Implementation based on: {description}
    return this.options;
  }
}
"#;

const TS_COMPONENT: &str = r#"// Generated component: {description}
import React, { useState } from 'react';

interface {pascal_name}Props {
  title?: string;
}

export const {pascal_name}: React.FC<{pascal_name}Props> = ({ title = '{pascal_name}' }) => {
  const [count, setCount] = useState<number>(0);

  // Implementation based on: {description}
  return (
    <div className="{kebab_name}">
      <h2>{title}</h2>
      <button onClick={() => setCount(count + 1)}>Clicked {count} times</button>
    </div>
  );
};

export default {pascal_name};
"#;

const TS_API: &str = r#"// Generated API endpoint: {description}
import { Request, Response, Router } from 'express';

const router = Router();

router.post('/{kebab_name}', async (req: Request, res: Response) => {
  // Implementation based on: {description}
  res.json({ success: true, data: req.body });
});

export default router;
"#;

const GO_FUNCTION: &str = r#"// Generated function: {description}
package main

// {pascal_name} implements: {description}
func {pascal_name}(input string) (string, error) {
	return input, nil
}
"#;

const GO_API: &str = r#"// Generated API endpoint: {description}
package main

import (
	"encoding/json"
	"net/http"
)

func {camel_name}Handler(w http.ResponseWriter, r *http.Request) {
	// Implementation based on: {description}
	w.Header().Set("Content-Type", "application/json")
	json.NewEncoder(w).Encode(map[string]bool{"success": true})
}

func main() {
	http.HandleFunc("/{kebab_name}", {camel_name}Handler)
	http.ListenAndServe(":8080", nil)
}
"#;

const RUST_FUNCTION: &str = r#"// Generated function: {description}
pub fn {snake_name}(input: &str) -> Result<String, String> {
    // Implementation based on: {description}
    Ok(input.to_string())
}
"#;

const RUST_STRUCT: &str = r#"// Generated struct: {description}
#[derive(Debug, Clone, Default)]
pub struct {pascal_name} {
    name: String,
}

impl {pascal_name} {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn execute(&self) -> &str {
        // Implementation based on: {description}
        &self.name
    }
}
"#;

const RUST_ALGORITHM: &str = r#"// Generated algorithm: {description}
pub fn {snake_name}<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    // Runs in O(n log n) time.
    let mut ordered = items.to_vec();
    ordered.sort();
    ordered
}
"#;

const CPP_FUNCTION: &str = r#"// Generated function: {description}
#include <string>

std::string {camel_name}(const std::string& input) {
    // Implementation based on: {description}
    return input;
}
"#;

const CPP_CLASS: &str = r#"// Generated class: {description}
#include <string>

class {pascal_name} {
public:
    explicit {pascal_name}(std::string name) : name_(std::move(name)) {}

    const std::string& name() const { return name_; }

    void execute() {
        // Implementation based on: {description}
    }

private:
    std::string name_;
};
"#;

const CSHARP_CLASS: &str = r#"// Generated class: {description}
public class {pascal_name}
{
    public string Name { get; set; }

    public void Execute()
    {
        // Implementation based on: {description}
    }
}
"#;

const CSHARP_API: &str = r#"// Generated API endpoint: {description}
using Microsoft.AspNetCore.Mvc;

[ApiController]
[Route("api/[controller]")]
public class {pascal_name}Controller : ControllerBase
{
    [HttpPost("{kebab_name}")]
    public IActionResult {pascal_name}([FromBody] object payload)
    {
        // Implementation based on: {description}
        return Ok(payload);
    }
}
"#;
