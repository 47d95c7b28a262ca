use std::time::Instant;

use crate::{
    error::{ErrorKind, PResult},
    syntax::{parse, Expression, Operator},
};

/// Above this many factors `^` switches from repeated multiplication to `powf`.
const MAX_REPEATED_PRODUCT: f64 = 1_000_000.0;

/// Evaluates one line of input through the whole pipeline.
pub(crate) fn eval(src: &str) -> PResult<f64> {
    let now = Instant::now();

    let expr = parse(src)?;
    let value = eval_expr(&expr)?;

    log::info!("evaluated `{src}` in {:.2?}", now.elapsed());
    Ok(value)
}

pub(crate) fn eval_expr(expr: &Expression) -> PResult<f64> {
    match expr {
        Expression::Number(v) => Ok(*v),
        Expression::Binary { lhs, op, rhs } => match op {
            Operator::Plus => Ok(eval_expr(lhs)? + eval_expr(rhs)?),
            Operator::Minus => Ok(eval_expr(lhs)? - eval_expr(rhs)?),
            Operator::Mul => Ok(eval_expr(lhs)? * eval_expr(rhs)?),
            Operator::Div => {
                let divisor = eval_expr(rhs)?;
                if divisor == 0.0 {
                    return Err(ErrorKind::DivisionByZero);
                }
                Ok(eval_expr(lhs)? / divisor)
            }
            Operator::Pow => {
                let count = eval_expr(rhs)?.trunc();
                Ok(repeated_product(eval_expr(lhs)?, count))
            }
        },
    }
}

/// Multiplies `base` into 1 `count` times. Counts of zero or below give 1.
fn repeated_product(base: f64, count: f64) -> f64 {
    if count.is_nan() || count <= 0.0 {
        return 1.0;
    }
    if count > MAX_REPEATED_PRODUCT {
        log::trace!("power with {count} factors falls back to powf");
        return base.powf(count);
    }
    (0..count as u64).fold(1.0, |acc, _| acc * base)
}

#[cfg(test)]
mod test {
    use super::{eval, repeated_product};
    use crate::{error::ErrorKind, syntax::MAX_DEPTH};

    #[test]
    fn eval_1() {
        assert_eq!(eval("3+4*2").unwrap(), 11.0);
    }

    #[test]
    fn eval_2() {
        assert_eq!(eval("(1+2)^3").unwrap(), 27.0);
    }

    #[test]
    fn eval_3() {
        assert_eq!(eval("10/2-3").unwrap(), 2.0);
    }

    #[test]
    fn eval_4() {
        assert_eq!(eval("-8+5*(13-1)*-1").unwrap(), -68.0);
    }

    #[test]
    fn eval_5() {
        assert_eq!(eval("(-8+5)*(13-1)*-1").unwrap(), 36.0);
    }

    #[test]
    fn power_is_left_associative() {
        assert_eq!(eval("2^3^2").unwrap(), 64.0);
        assert_eq!(eval("2^(3^2)").unwrap(), 512.0);
    }

    #[test]
    fn power_truncates_exponent() {
        assert_eq!(eval("5^-1").unwrap(), 1.0);
        assert_eq!(eval("5^0").unwrap(), 1.0);
        assert_eq!(eval("9^0.5").unwrap(), 1.0);
        assert_eq!(eval("3^2.7").unwrap(), 9.0);
        assert_eq!(eval("0.5^2").unwrap(), 0.25);
        assert_eq!(eval("(-2)^3").unwrap(), -8.0);
    }

    #[test]
    fn power_with_huge_count() {
        assert_eq!(repeated_product(1.0, 1e12), 1.0);
        assert_eq!(repeated_product(2.0, 2e6), f64::INFINITY);
        assert_eq!(repeated_product(-1.0, 3e6 + 1.0), -1.0);
    }

    #[test]
    fn nested_parens_evaluate_first() {
        assert_eq!(eval("((((1+2))))*3").unwrap(), 9.0);
        assert_eq!(eval("2*(3+(4-(5*(6/3))))").unwrap(), -6.0);
    }

    #[test]
    fn fractional_literals() {
        assert_eq!(eval("1.5*4").unwrap(), 6.0);
        assert_eq!(eval(".25+.75").unwrap(), 1.0);
        assert_eq!(eval("3.").unwrap(), 3.0);
        assert_eq!(eval(".+1").unwrap(), 1.0);
    }

    #[test]
    fn long_sum_within_depth() {
        let src = vec!["1"; 2000].join("+");
        assert_eq!(eval(&src).unwrap(), 2000.0);
    }

    #[test]
    fn hundred_thousand_term_sum_fails_cleanly() {
        let src = vec!["1"; 100_000].join("+");
        assert_eq!(eval(&src), Err(ErrorKind::NestingTooDeep(MAX_DEPTH)));

        let src = format!("{}1{}", "(1+".repeat(100_000), ")".repeat(100_000));
        assert_eq!(eval(&src), Err(ErrorKind::NestingTooDeep(MAX_DEPTH)));
    }

    #[test]
    fn division_by_zero() {
        assert_eq!(eval("1/0"), Err(ErrorKind::DivisionByZero));
        assert_eq!(eval("1/(2-2)"), Err(ErrorKind::DivisionByZero));
        assert_eq!(eval("1/-0"), Err(ErrorKind::DivisionByZero));
        assert_eq!(eval("0/4").unwrap(), 0.0);
    }

    #[test]
    fn first_error_short_circuits() {
        assert_eq!(eval("(1/0"), Err(ErrorKind::UnbalancedParenthesis('(')));
        assert!(matches!(
            eval("1 2"),
            Err(ErrorKind::UnknownCharacter { ch: ' ', .. })
        ));
        assert_eq!(eval(""), Err(ErrorKind::EmptyExpression));
        assert_eq!(eval("(1+2"), Err(ErrorKind::UnbalancedParenthesis('(')));
    }
}
