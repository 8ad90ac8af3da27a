use super::{Address, Opcode, Program, Stack, N_REGS, N_STACKS};
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// Pending output is surfaced to the front end once it reaches this many
/// bytes, even mid-slice, so output-heavy loops stay bounded.
const PRINT_FLUSH: usize = 8192;

/// ## Runtime events
///
/// `Runtime::execute` runs a slice of the program and yields one of
/// these. The front end owns the real input and output streams; the
/// machine never touches them directly.

pub enum Event {
    /// Cycle budget exhausted; call `execute` again.
    Running,
    /// Bytes for the output stream, in execution order.
    Print(Vec<u8>),
    /// The machine wants one input byte; answer with [`Runtime::input`].
    Input,
    /// The program counter reached the end of the program.
    Stopped,
    /// Fatal interpreter error; the run is over.
    Error(Error),
}

enum State {
    Run,
    Input,
    Stopped,
}

enum Flow {
    Continue,
    Input,
}

/// ## The Minim machine
///
/// All interpreter state for one run: the program, the program counter,
/// the register file, the stack bank with its selector, and the two loop
/// call stacks. Created fresh per run; nothing survives it.

pub struct Runtime {
    program: Program,
    pc: Address,
    regs: [u8; N_REGS],
    stacks: Vec<Stack<u8>>,
    stack: usize,
    squares: Stack<Address>,
    curlies: Stack<Address>,
    eof: u8,
    print: Vec<u8>,
    pending: Option<Option<u8>>,
    failed: Option<Error>,
    interrupted: bool,
    state: State,
}

impl Runtime {
    pub fn new(program: Program) -> Runtime {
        Runtime {
            program,
            pc: 0,
            regs: [0; N_REGS],
            stacks: (0..N_STACKS).map(|_| Stack::new("data stack")).collect(),
            stack: 0,
            squares: Stack::new("square call stack"),
            curlies: Stack::new("curly call stack"),
            eof: 0,
            print: Vec::new(),
            pending: None,
            failed: None,
            interrupted: false,
            state: State::Run,
        }
    }

    /// Set the byte value pushed by `,` when input is exhausted.
    pub fn set_eof(&mut self, eof: u8) {
        self.eof = eof;
    }

    /// Answer an [`Event::Input`]. `None` means end-of-input; the machine
    /// pushes the configured substitute instead. End-of-input is not
    /// sticky: the next `,` asks again.
    pub fn input(&mut self, byte: Option<u8>) {
        if let State::Input = self.state {
            self.pending = Some(byte);
        }
    }

    /// Request a clean stop. The next `execute` slice reports a fatal
    /// interrupted error instead of running.
    pub fn interrupt(&mut self) {
        self.interrupted = true;
    }

    /// Run up to `cycles` instructions and report what happened. Pending
    /// output is always surfaced before any terminal event, so the front
    /// end sees stdout bytes in execution order.
    pub fn execute(&mut self, cycles: usize) -> Event {
        if self.interrupted {
            self.interrupted = false;
            return self.fail(error!(Interrupted, self.pc));
        }
        match self.state {
            State::Stopped => {
                let event = match self.failed.take() {
                    Some(error) => Event::Error(error),
                    None => Event::Stopped,
                };
                return self.flush_or(event);
            }
            State::Input => match self.pending.take() {
                Some(byte) => {
                    self.state = State::Run;
                    if let Err(error) = self.resume(byte) {
                        return self.fail(error);
                    }
                }
                None => return self.flush_or(Event::Input),
            },
            State::Run => {}
        }
        for _ in 0..cycles {
            if self.pc >= self.program.len() {
                self.state = State::Stopped;
                return self.flush_or(Event::Stopped);
            }
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Input) => {
                    self.state = State::Input;
                    return self.flush_or(Event::Input);
                }
                Err(error) => return self.fail(error),
            }
            if self.print.len() >= PRINT_FLUSH {
                return Event::Print(std::mem::take(&mut self.print));
            }
        }
        self.flush_or(Event::Running)
    }

    /// Surface pending output first; the underlying condition is kept in
    /// `state`/`failed` and re-reported on the next call.
    fn flush_or(&mut self, event: Event) -> Event {
        if self.print.is_empty() {
            event
        } else {
            Event::Print(std::mem::take(&mut self.print))
        }
    }

    fn fail(&mut self, error: Error) -> Event {
        self.state = State::Stopped;
        if self.print.is_empty() {
            Event::Error(error)
        } else {
            self.failed = Some(error);
            Event::Print(std::mem::take(&mut self.print))
        }
    }

    /// Finish a `,` after the front end answered.
    fn resume(&mut self, byte: Option<u8>) -> Result<()> {
        let val = match byte {
            Some(byte) => byte,
            None => self.eof,
        };
        self.push(val)?;
        self.pc += 1;
        Ok(())
    }

    fn cur(&self) -> &Stack<u8> {
        &self.stacks[self.stack]
    }

    fn cur_mut(&mut self) -> &mut Stack<u8> {
        &mut self.stacks[self.stack]
    }

    fn push(&mut self, val: u8) -> Result<()> {
        self.cur_mut().push(val)
    }

    fn pop(&mut self, pc: Address, ch: u8) -> Result<u8> {
        self.cur_mut()
            .pop()
            .map_err(|e| e.at_position(pc).with_char(char::from(ch)))
    }

    fn pop_2(&mut self, pc: Address, ch: u8) -> Result<(u8, u8)> {
        self.cur_mut()
            .pop_2()
            .map_err(|e| e.at_position(pc).with_char(char::from(ch)))
    }

    fn peek(&self, pc: Address, ch: u8) -> Result<u8> {
        match self.cur().peek() {
            Ok(val) => Ok(*val),
            Err(e) => Err(e.at_position(pc).with_char(char::from(ch))),
        }
    }

    /// Fetch, decode, and execute one instruction.
    fn step(&mut self) -> Result<Flow> {
        let pc = self.pc;
        let byte = match self.program.get(pc) {
            Some(byte) => byte,
            None => return Err(error!(InternalError, pc; "fetch past end of program")),
        };
        let opcode = match Opcode::decode(byte) {
            Some(opcode) => opcode,
            None => {
                self.pc = pc + 1;
                return Ok(Flow::Continue);
            }
        };
        use Opcode::*;
        match opcode {
            Literal(val) => self.push(val)?,
            Add => {
                let (a, b) = self.pop_2(pc, byte)?;
                self.push(a.wrapping_add(b))?;
            }
            Sub => {
                let (a, b) = self.pop_2(pc, byte)?;
                self.push(a.wrapping_sub(b))?;
            }
            Mul => {
                let (a, b) = self.pop_2(pc, byte)?;
                self.push(a.wrapping_mul(b))?;
            }
            Div => {
                let (a, b) = self.pop_2(pc, byte)?;
                if b == 0 {
                    return Err(error!(DivisionByZero, pc, char::from(byte)));
                }
                self.push(a / b)?;
            }
            Rem => {
                let (a, b) = self.pop_2(pc, byte)?;
                if b == 0 {
                    return Err(error!(DivisionByZero, pc, char::from(byte)));
                }
                self.push(a % b)?;
            }
            And => {
                let (a, b) = self.pop_2(pc, byte)?;
                self.push(a & b)?;
            }
            Or => {
                let (a, b) = self.pop_2(pc, byte)?;
                self.push(a | b)?;
            }
            Xor => {
                let (a, b) = self.pop_2(pc, byte)?;
                self.push(a ^ b)?;
            }
            Drop => {
                self.pop(pc, byte)?;
            }
            Dup => {
                let top = self.peek(pc, byte)?;
                self.push(top)?;
            }
            Swap => {
                let (a, b) = self.pop_2(pc, byte)?;
                self.push(b)?;
                self.push(a)?;
            }
            NextStack => self.stack = (self.stack + 1) % N_STACKS,
            PrevStack => self.stack = (self.stack + N_STACKS - 1) % N_STACKS,
            OutByte => {
                let val = self.pop(pc, byte)?;
                self.print.push(val);
            }
            OutNum => {
                let val = self.pop(pc, byte)?;
                self.print.extend_from_slice(format!("{} ", val).as_bytes());
            }
            InByte => return Ok(Flow::Input),
            LoopOpen => {
                if self.peek(pc, byte)? == 0 {
                    return self.skip_body(pc, b'[', b']');
                }
                self.squares.push(pc)?;
            }
            LoopClose => {
                let open = match self.squares.pop() {
                    Ok(open) => open,
                    Err(_) => {
                        return Err(error!(UnmatchedDelimiter, pc, ']'; "no matching '['"))
                    }
                };
                self.pc = open;
                return Ok(Flow::Continue);
            }
            DrainOpen => {
                if self.cur().is_empty() {
                    return self.skip_body(pc, b'{', b'}');
                }
                self.curlies.push(pc)?;
            }
            DrainClose => {
                let open = match self.curlies.pop() {
                    Ok(open) => open,
                    Err(_) => {
                        return Err(error!(UnmatchedDelimiter, pc, '}'; "no matching '{'"))
                    }
                };
                self.pc = open;
                return Ok(Flow::Continue);
            }
            Store => {
                let (index, val) = self.pop_2(pc, byte)?;
                self.regs[usize::from(index)] = val;
            }
            Load => {
                let index = self.pop(pc, byte)?;
                let val = self.regs[usize::from(index)];
                self.push(val)?;
            }
            StringLit => return self.string_literal(),
            NumberLit => return self.number_literal(),
        }
        self.pc = pc + 1;
        Ok(Flow::Continue)
    }

    /// Skip a disabled loop body, landing just after the matching close
    /// delimiter. Nothing is recorded on the call stacks.
    fn skip_body(&mut self, pc: Address, open: u8, close: u8) -> Result<Flow> {
        match self.program.match_delim(pc + 1, open, close) {
            Some(end) => {
                self.pc = end + 1;
                Ok(Flow::Continue)
            }
            None => match open {
                b'[' => Err(error!(UnmatchedDelimiter, pc, '['; "no matching ']'")),
                _ => Err(error!(UnmatchedDelimiter, pc, '{'; "no matching '}'")),
            },
        }
    }

    /// `"` with the program counter on the opening quote. The text is
    /// pushed back-to-front so the first character pops first.
    fn string_literal(&mut self) -> Result<Flow> {
        let pc = self.pc;
        let close = match self.program.find(pc + 1, b'"') {
            Some(close) => close,
            None => return Err(error!(UnclosedLiteral, pc, '"'; "string literal")),
        };
        let text = self.program.bytes()[pc + 1..close].to_vec();
        for &byte in text.iter().rev() {
            self.push(byte)?;
        }
        self.pc = close + 1;
        Ok(Flow::Continue)
    }

    /// `'` with the program counter on the opening quote. Digits are
    /// accumulated as `10 * n + digit` in wrapping byte arithmetic, so
    /// the value reduces modulo 256 at every step.
    fn number_literal(&mut self) -> Result<Flow> {
        let pc = self.pc;
        let mut value: u8 = 0;
        let mut i = pc + 1;
        while let Some(byte) = self.program.get(i) {
            match byte {
                b'\'' => {
                    self.push(value)?;
                    self.pc = i + 1;
                    return Ok(Flow::Continue);
                }
                b'0'..=b'9' => {
                    value = value.wrapping_mul(10).wrapping_add(byte - b'0');
                }
                _ => {
                    return Err(error!(
                        SyntaxError, i, char::from(byte);
                        "unexpected character in numeric literal"
                    ))
                }
            }
            i += 1;
        }
        Err(error!(UnclosedLiteral, pc, '\''; "numeric literal"))
    }
}
