//! Canned snippet selection.
//!
//! Every supported language owns a [`SnippetTable`]: an ordered list of
//! keyword rules plus one default scaffold. The prompt is lowercased and
//! trimmed, then the first rule with a keyword contained in it wins.

use crate::languages::Language;

/// Returned for language identifiers outside the supported set.
pub const UNSUPPORTED_SNIPPET: &str = "// Language not supported yet.";

/// The topic a prompt resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Calculator,
    Todo,
    FizzBuzz,
    Guess,
    Default,
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Topic::Calculator => "calculator",
            Topic::Todo => "todo",
            Topic::FizzBuzz => "fizzbuzz",
            Topic::Guess => "guess",
            Topic::Default => "default",
        };
        f.write_str(name)
    }
}

/// One first-match-wins rule: any keyword selects the snippet.
#[derive(Debug)]
pub struct Rule {
    pub topic: Topic,
    pub keywords: &'static [&'static str],
    pub snippet: &'static str,
}

impl Rule {
    fn matches(&self, prompt: &str) -> bool {
        self.keywords.iter().any(|keyword| prompt.contains(keyword))
    }
}

#[derive(Debug)]
pub struct SnippetTable {
    pub rules: &'static [Rule],
    pub default: &'static str,
}

impl SnippetTable {
    /// Resolve an already normalized prompt.
    fn select(&self, prompt: &str) -> (Topic, &'static str) {
        self.rules
            .iter()
            .find(|rule| rule.matches(prompt))
            .map(|rule| (rule.topic, rule.snippet))
            .unwrap_or((Topic::Default, self.default))
    }
}

pub fn table(language: Language) -> &'static SnippetTable {
    match language {
        Language::Python => &PYTHON,
        Language::JavaScript => &JAVASCRIPT,
        Language::Cpp => &CPP,
        Language::Java => &JAVA,
    }
}

fn normalize_prompt(prompt: &str) -> String {
    prompt.to_lowercase().trim().to_string()
}

/// Which topic `prompt` selects for `language`.
pub fn select_topic(prompt: &str, language: Language) -> Topic {
    table(language).select(&normalize_prompt(prompt)).0
}

/// Snippet for a supported language.
pub fn generate_for(prompt: &str, language: Language) -> &'static str {
    table(language).select(&normalize_prompt(prompt)).1
}

/// Snippet for a raw language identifier.
///
/// Unknown identifiers get [`UNSUPPORTED_SNIPPET`] instead of an error.
/// The identifier must already be lowercase.
pub fn generate_code(prompt: &str, language: &str) -> String {
    match language {
        "python" => generate_for(prompt, Language::Python),
        "javascript" => generate_for(prompt, Language::JavaScript),
        "cpp" => generate_for(prompt, Language::Cpp),
        "java" => generate_for(prompt, Language::Java),
        _ => UNSUPPORTED_SNIPPET,
    }
    .to_string()
}

// ============================================================================
// Python
// ============================================================================

const PYTHON_CALCULATOR: &str = r#"# Simple Python Calculator
def add(a, b): return a + b
def sub(a, b): return a - b
def mul(a, b): return a * b
def div(a, b): return a / b if b != 0 else float('inf')

if __name__ == "__main__":
    print("Calculator: add/sub/mul/div")
    op = input("Operation: ")
    a = float(input("a = "))
    b = float(input("b = "))
    ops = {"add": add, "sub": sub, "mul": mul, "div": div}
    if op in ops:
        print("Result:", ops[op](a, b))
    else:
        print("Unknown operation")
"#;

const PYTHON_TODO: &str = r#"# Minimal CLI To-Do
todos = []
def show():
    print("\nYour To-Dos:")
    for i, t in enumerate(todos, 1):
        print(f"{i}. {t}")
while True:
    cmd = input("\n(add/list/quit): ").strip().lower()
    if cmd == "add":
        todos.append(input("Task: ").strip())
    elif cmd == "list":
        show()
    elif cmd == "quit":
        break
    else:
        print("Try: add, list, quit")
"#;

const PYTHON_FIZZBUZZ: &str = r#"# FizzBuzz
for i in range(1, 101):
    out = ""
    if i % 3 == 0: out += "Fizz"
    if i % 5 == 0: out += "Buzz"
    print(out or i)
"#;

const PYTHON_GUESS: &str = r#"# Number Guessing Game
import random
secret = random.randint(1, 100)
while True:
    g = int(input("Guess 1-100: "))
    if g == secret:
        print("Correct!")
        break
    print("Too low" if g < secret else "Too high")
"#;

const PYTHON_DEFAULT: &str = r#"# Starter Python Program
def main():
    print("Hello from CodePal!")
if __name__ == "__main__":
    main()
"#;

static PYTHON: SnippetTable = SnippetTable {
    rules: &[
        Rule {
            topic: Topic::Calculator,
            keywords: &["calculator"],
            snippet: PYTHON_CALCULATOR,
        },
        Rule {
            topic: Topic::Todo,
            keywords: &["todo", "to-do"],
            snippet: PYTHON_TODO,
        },
        Rule {
            topic: Topic::FizzBuzz,
            keywords: &["fizz"],
            snippet: PYTHON_FIZZBUZZ,
        },
        Rule {
            topic: Topic::Guess,
            keywords: &["guess"],
            snippet: PYTHON_GUESS,
        },
    ],
    default: PYTHON_DEFAULT,
};

// ============================================================================
// JavaScript
// ============================================================================

const JS_CALCULATOR: &str = r#"// Simple JS Calculator (Node)
function calc(op, a, b){
  const ops = {
    add: (x,y)=>x+y, sub:(x,y)=>x-y, mul:(x,y)=>x*y, div:(x,y)=>y!==0?x/y:Infinity
  };
  return ops[op] ? ops[op](a,b) : "Unknown op";
}
console.log(calc("add", 2, 3));
"#;

const JS_TODO: &str = r#"// Minimal To-Do in JS
const todos = [];
function add(task){ todos.push(task); }
function list(){ console.log(todos.map((t,i)=>`${i+1}. ${t}`).join("\n")); }
add("Learn JS"); add("Build CodePal"); list();
"#;

const JS_FIZZBUZZ: &str = r#"// FizzBuzz
for (let i=1;i<=100;i++){
  let out = "";
  if (i%3===0) out += "Fizz";
  if (i%5===0) out += "Buzz";
  console.log(out || i);
}
"#;

const JS_GUESS: &str = r#"// Number Guessing Game (Browser)
let secret = Math.floor(Math.random()*100)+1;
function guess(n){
  if(n===secret){ console.log("Correct!"); return true; }
  console.log(n<secret? "Too low":"Too high"); return false;
}
"#;

const JS_DEFAULT: &str = r#"// Starter JS
console.log("Hello from CodePal!");
"#;

static JAVASCRIPT: SnippetTable = SnippetTable {
    rules: &[
        Rule {
            topic: Topic::Calculator,
            keywords: &["calculator"],
            snippet: JS_CALCULATOR,
        },
        Rule {
            topic: Topic::Todo,
            keywords: &["todo", "to-do"],
            snippet: JS_TODO,
        },
        Rule {
            topic: Topic::FizzBuzz,
            keywords: &["fizz"],
            snippet: JS_FIZZBUZZ,
        },
        Rule {
            topic: Topic::Guess,
            keywords: &["guess"],
            snippet: JS_GUESS,
        },
    ],
    default: JS_DEFAULT,
};

// ============================================================================
// C++
// ============================================================================

const CPP_FIZZBUZZ: &str = r#"#include <bits/stdc++.h>
using namespace std;
int main(){
  for(int i=1;i<=100;i++){
    string out="";
    if(i%3==0) out+="Fizz";
    if(i%5==0) out+="Buzz";
    cout << (out.size()? out: to_string(i)) << "\n";
  }
}
"#;

const CPP_DEFAULT: &str = r#"#include <bits/stdc++.h>
using namespace std;
int main(){ cout<<"Hello from CodePal!"<<endl; }
"#;

static CPP: SnippetTable = SnippetTable {
    rules: &[Rule {
        topic: Topic::FizzBuzz,
        keywords: &["fizz"],
        snippet: CPP_FIZZBUZZ,
    }],
    default: CPP_DEFAULT,
};

// ============================================================================
// Java
// ============================================================================

const JAVA_FIZZBUZZ: &str = r#"public class Main {
  public static void main(String[] args){
    for(int i=1;i<=100;i++){
      String out="";
      if(i%3==0) out+="Fizz";
      if(i%5==0) out+="Buzz";
      System.out.println(out.isEmpty()? i: out);
    }
  }
}
"#;

const JAVA_DEFAULT: &str = r#"public class Main {
  public static void main(String[] args){
    System.out.println("Hello from CodePal!");
  }
}
"#;

static JAVA: SnippetTable = SnippetTable {
    rules: &[Rule {
        topic: Topic::FizzBuzz,
        keywords: &["fizz"],
        snippet: JAVA_FIZZBUZZ,
    }],
    default: JAVA_DEFAULT,
};
