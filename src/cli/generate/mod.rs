//! Generate command - prints passwords without storing them

use clap::Args;

use crate::domain::password::generator;

/// Arguments for the generate command
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct GenerateArgs {
    /// Password length (4-30)
    #[arg(long, short, default_value_t = 12)]
    pub length: i32,

    /// 1 = digits, 2 = letters and digits, 3 = letters, digits and symbols
    #[arg(long, short, default_value_t = 3)]
    pub complexity: i32,

    /// How many passwords to print
    #[arg(long, short = 'n', default_value_t = 1)]
    pub count: usize,
}

pub fn run(args: GenerateArgs) -> anyhow::Result<()> {
    for password in passwords(&args)? {
        println!("{}", password);
    }

    Ok(())
}

fn passwords(args: &GenerateArgs) -> anyhow::Result<Vec<String>> {
    (0..args.count)
        .map(|_| generator::generate(args.length, args.complexity).map_err(anyhow::Error::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passwords_count_and_length() {
        let args = GenerateArgs {
            length: 10,
            complexity: 2,
            count: 4,
        };

        let generated = passwords(&args).unwrap();
        assert_eq!(generated.len(), 4);
        assert!(generated.iter().all(|p| p.len() == 10));
    }

    #[test]
    fn test_invalid_arguments_fail() {
        let args = GenerateArgs {
            length: 2,
            complexity: 2,
            count: 1,
        };

        let err = passwords(&args).unwrap_err();
        assert_eq!(err.to_string(), generator::LENGTH_OUT_OF_RANGE);
    }
}
