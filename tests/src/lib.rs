//! End-to-end checks that drive the scanner and the dispatcher against
//! in-process players served over real HTTP on loopback addresses.


#[cfg(test)]
mod discovery;
#[cfg(test)]
mod dispatch;
