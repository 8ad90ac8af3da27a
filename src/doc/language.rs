/*!
# Minim Language Reference

A Minim program is plain text. The interpreter reads one character at a
time and acts on it; there is no other structure. Characters that are
not listed below (including all whitespace) do nothing.

## Values

Every value is one byte. All arithmetic wraps modulo 256. Digits `0`-`9`
push their numeric value; ASCII letters push their own character code,
so `A` pushes 65.

## Literals

* `'123'`: numeric literal. Digits between the quotes accumulate as
  `10 × n + digit` in wrapping byte arithmetic, so `'999'` pushes 231.
  Any other character inside the quotes is an error, as is a missing
  closing quote.
* `"text"`: string literal. Every character between the quotes is
  pushed, last character first, so the *first* character of the text is
  on top of the stack afterwards. A missing closing quote is an error.
  There is no escape syntax; a string cannot contain `"`.

## Stacks

The machine has 256 stacks; one is current at any time. The selector
starts at stack 0 and moves with wraparound.

| Op | Effect |
|----|--------|
| `>` | select the next stack (255 wraps to 0) |
| `<` | select the previous stack (0 wraps to 255) |
| `_` | pop and discard the top value |
| `#` | duplicate the top value |
| `@` | swap the top two values |

## Arithmetic and logic

Binary operators pop the top value `b`, then the next value `a`, and
push `a op b`.

| Op | Effect |
|----|--------|
| `+` `-` `*` | wrapping add, subtract, multiply |
| `/` `%` | divide, remainder; a zero divisor is a fatal error |
| `&` `\|` `^` | bitwise and, or, exclusive or |

## Registers

256 byte registers, all starting at zero, shared by all stacks.

| Op | Effect |
|----|--------|
| `=` | pop a value, then a register index; store the value |
| `$` | pop a register index; push that register's value |

## Input and output

| Op | Effect |
|----|--------|
| `.` | pop one value and write it to output as a raw byte |
| `;` | pop one value and write its decimal text plus one space |
| `,` | read one input byte and push it; at end-of-input push the substitute byte (`-e`, default 0) instead |

End-of-input is not a one-way door: if more input shows up later, a
later `,` will read it.

## Loops

Both loop forms check their condition at the opening delimiter, every
time around.

* `[`: if the top of the current stack is zero (peeked, not popped),
  skip past the matching `]` without running the body. Otherwise enter
  the body; the matching `]` jumps back to this `[` to re-check.
* `{`: the same, but the condition is "the current stack is non-empty",
  so the loop is a natural way to drain a stack.

Matching is nesting-aware when a body is skipped. A `]` or `}` that
executes without its opener is a fatal error.

## Exit status

| Status | Meaning |
|--------|---------|
| 0 | the program ran off the end of its text |
| 1 | interpreter error, usage error, or interrupt |
| 2 | out of memory |
*/
