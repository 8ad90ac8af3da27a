/*!
# An Introduction to Minim

Minim is a stack language where every instruction is one character.
The machine gives you 256 stacks of bytes, 256 byte registers, and two
looping constructs; everything else is up to the program.

Start with the classic. Save this as `hello.mn` and run `minim hello.mn`:

<pre><code>'10'"!dlrow ,olleH"@{.}
</code></pre>

Wait, that's not right. A string literal pushes its *first* character on
top, so the text goes on forwards and comes off forwards. The program is
simply:

<pre><code>'10'"Hello, world!"{.}
</code></pre>

`'10'` pushes a newline byte first (it will print last). The string
literal pushes the message with `H` on top. `{.}` is a loop that runs
while the current stack is non-empty, and `.` pops one byte and prints
it. The loop drains the stack, printing the message and then the
newline, then the program ends.

Counting works with the other loop, `[` ... `]`, which runs while the
top of the stack is nonzero:

<pre><code>9[#;1-]
</code></pre>

`9` pushes nine. Each pass duplicates the counter, prints it as a
decimal number with `;`, and subtracts one. When the top reaches zero
the `[` check fails and execution continues past the `]`.

Input arrives one byte at a time with `,`. When there is no more input,
`,` pushes a substitute byte instead; it is 0 unless you pick another
with the `-e` flag. Run `minim -e 4 cat.mn` with:

<pre><code>,4-[4+.,4-]
</code></pre>

and the program copies its input to its output, stopping at the
substitute. (The `4-`/`4+` dance is because the loop tests for zero.)

Anything the interpreter does not recognize (spaces, newlines,
punctuation outside the opcode set) is skipped, so programs can be laid
out freely. When something does go wrong (popping an empty stack, a `]`
with no `[`, dividing by zero) the interpreter stops with a one-line
diagnostic naming the position and the offending character.
*/
