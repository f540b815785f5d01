use anyhow::{Context, Result};
use thiserror::Error;

#[derive(Debug, Eq, PartialEq, Clone)]
pub enum Statement {
    Insert(i32),
    Search(i32),
    Successor(i32),
    Predecessor(i32),
    Min,
    Max,
    Print,
    Height,
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("esperado 1 ou 2 tokens, chegou {0}")]
    WrongTokenCount(usize),
    #[error("não esperado esse caba {0}")]
    UnknownStatement(String),
    #[error("valor não é um inteiro")]
    InvalidValue(#[from] std::num::ParseIntError),
}

pub trait Parser {
    fn parse_lines(&self, s: &str) -> Result<Vec<Statement>>;
    fn parse_line(&self, s: &str) -> Result<Statement, ParseError>;
}

pub struct ParserArretado {}

impl ParserArretado {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for ParserArretado {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for ParserArretado {
    fn parse_lines(&self, s: &str) -> Result<Vec<Statement>> {
        let mut vec: Vec<Statement> = Vec::new();

        for (number, line) in s.lines().enumerate() {
            let stm = self
                .parse_line(line)
                .with_context(|| format!("linha {}", number + 1))?;
            vec.push(stm);
        }

        Ok(vec)
    }

    fn parse_line(&self, s: &str) -> Result<Statement, ParseError> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        if tokens.is_empty() || tokens.len() > 2 {
            return Err(ParseError::WrongTokenCount(tokens.len()));
        }

        let stm = tokens[0];

        if tokens.len() == 1 {
            return match stm.to_lowercase().as_str() {
                "imp" => Ok(Statement::Print),
                "min" => Ok(Statement::Min),
                "max" => Ok(Statement::Max),
                "alt" => Ok(Statement::Height),
                e => Err(ParseError::UnknownStatement(e.to_string())),
            };
        }

        let value: i32 = tokens[1].parse()?;
        match stm.to_lowercase().as_str() {
            "inc" => Ok(Statement::Insert(value)),
            "bus" => Ok(Statement::Search(value)),
            "suc" => Ok(Statement::Successor(value)),
            "pre" => Ok(Statement::Predecessor(value)),
            e => Err(ParseError::UnknownStatement(e.to_string())),
        }
    }
}

#[cfg(test)]
mod parser_arretado_tests {
    use pretty_assertions::assert_eq;

    use crate::mengo::parser::{Parser, ParserArretado, Statement};
    use anyhow::Result;

    #[test]
    fn test_parse_insert_statement() -> Result<()> {
        // Arrange
        let s = "INC 14";
        let p = ParserArretado::new();
        let expected_stm = Statement::Insert(14);

        // Act
        let actual_stm = p.parse_line(s)?;

        //Assert
        assert_eq!(expected_stm, actual_stm);

        Ok(())
    }

    #[test]
    fn test_parse_search_statement() -> Result<()> {
        // Arrange
        let s = "BUS 14";
        let p = ParserArretado::new();
        let expected_stm = Statement::Search(14);

        // Act
        let actual_stm = p.parse_line(s)?;

        //Assert
        assert_eq!(expected_stm, actual_stm);

        Ok(())
    }

    #[test]
    fn test_parse_successor_statement() -> Result<()> {
        // Arrange
        let s = "SUC 14";
        let p = ParserArretado::new();
        let expected_stm = Statement::Successor(14);

        // Act
        let actual_stm = p.parse_line(s)?;

        //Assert
        assert_eq!(expected_stm, actual_stm);

        Ok(())
    }

    #[test]
    fn test_parse_predecessor_statement() -> Result<()> {
        // Arrange
        let s = "PRE 14";
        let p = ParserArretado::new();
        let expected_stm = Statement::Predecessor(14);

        // Act
        let actual_stm = p.parse_line(s)?;

        //Assert
        assert_eq!(expected_stm, actual_stm);

        Ok(())
    }

    #[test]
    fn test_parse_min_and_max_statements() -> Result<()> {
        // Arrange
        let p = ParserArretado::new();

        // Act
        let actual_min = p.parse_line("MIN")?;
        let actual_max = p.parse_line("max")?;

        //Assert
        assert_eq!(Statement::Min, actual_min);
        assert_eq!(Statement::Max, actual_max);

        Ok(())
    }

    #[test]
    fn test_parse_print_statement() -> Result<()> {
        // Arrange
        let s = "IMP";
        let p = ParserArretado::new();
        let expected_stm = Statement::Print;

        // Act
        let actual_stm = p.parse_line(s)?;

        //Assert
        assert_eq!(expected_stm, actual_stm);

        Ok(())
    }

    #[test]
    fn test_parse_height_statement() -> Result<()> {
        // Arrange
        let s = "ALT";
        let p = ParserArretado::new();
        let expected_stm = Statement::Height;

        // Act
        let actual_stm = p.parse_line(s)?;

        //Assert
        assert_eq!(expected_stm, actual_stm);

        Ok(())
    }

    #[test]
    fn test_parse_lines() -> Result<()> {
        // Arrange
        let s = "INC 69\nBUS 420\nSUC 7\nPRE 7\nMIN\nMAX\nIMP\nALT";
        let p = ParserArretado::new();
        let expected_stms = Vec::from([
            Statement::Insert(69),
            Statement::Search(420),
            Statement::Successor(7),
            Statement::Predecessor(7),
            Statement::Min,
            Statement::Max,
            Statement::Print,
            Statement::Height,
        ]);

        // Act
        let actual_stms = p.parse_lines(s)?;

        //Assert
        assert_eq!(expected_stms, actual_stms);

        Ok(())
    }

    #[test]
    fn test_cant_parse_unknown_two_tokens() {
        // Arrange
        let s = "TUBIAS 24";
        let p = ParserArretado::new();

        // Act
        let err = p.parse_line(s);

        //Assert
        assert!(err.is_err());
    }

    #[test]
    fn test_cant_parse_unknown_one_token() {
        // Arrange
        let s = "GARGAMEL";
        let p = ParserArretado::new();

        // Act
        let err = p.parse_line(s);

        //Assert
        assert!(err.is_err());
    }

    #[test]
    fn test_cant_parse_too_many_tokens() {
        // Arrange
        let s = "INC 1 2";
        let p = ParserArretado::new();

        // Act
        let err = p.parse_line(s);

        //Assert
        assert!(err.is_err());
    }

    #[test]
    fn test_cant_parse_a_value_that_is_not_a_number() {
        // Arrange
        let s = "INC quatorze";
        let p = ParserArretado::new();

        // Act
        let err = p.parse_line(s);

        //Assert
        assert!(err.is_err());
    }

    #[test]
    fn test_parse_lines_reports_the_broken_line() {
        // Arrange
        let s = "INC 1\nTUBIAS 2";
        let p = ParserArretado::new();

        // Act
        let err = p.parse_lines(s).unwrap_err();

        //Assert
        assert_eq!("linha 2", err.to_string());
    }
}
