use lazy_list::List;
use lazy_list::list;
use lazy_list::profiling;

fn main() -> lazy_list::Result<()> {
    profiling::reset();

    let primes = List::inf(2u64).filter(|n| (2..*n).take_while(|d| d * d <= *n).all(|d| n % d != 0));
    println!("primes:     {}", primes.take(10));

    let fib = List::unfold((0u64, 1u64), |(a, b)| Some((a, (b, a + b))));
    println!("fibonacci:  {}", fib.take(12));
    println!("fib(90):    {}", fib.index(90)?);

    let countdown = List::range(10, 0);
    println!("countdown:  {}", countdown);

    let lights = list!["red", "green", "amber"].cycle()?;
    println!("lights:     {}", lights.take(7));

    let sorted = list![5, 3, 9, 1, 1, 8, 2].sort();
    println!("sorted:     {}", sorted);

    let pairs = list![1, 2].traverse(|x| list![*x, x * 10]);
    println!("traverse:   {}", pairs);
    println!("pending:    {:?}", fib);

    if let Err(err) = List::<i32>::empty().head() {
        println!("error:      {}", err);
    }

    println!("{}", profiling::report());
    return Ok(());
}
