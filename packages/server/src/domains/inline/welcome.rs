/// Usage text sent in reply to `/start`.
pub const WELCOME: &str = "This bot pipes inline bots into each other.
Type an inline query with this syntax:

```
@pipesbot text | @botname:selector | @botname2 $
```

For example:
```
@pipesbot Hey I'm writing this using the leet filter of @filtersbot w/ @lolcatzbot | @filtersbot:eleet | @lolcatzbot $
```

This will:
1) Send the inline query \"Hey I'm writing this using the leet filter of @filtersbot w/ @lolcatzbot\" to @filtersbot
2) Pick the result whose text matches \"eleet\" (regexes are supported, a number picks the nth result, no selector keeps all results)
3) If that result is a text message, send its text as an inline query to @lolcatzbot
4) Return every result of @lolcatzbot to you

The chain stops early at media results or when more than one result is left.
The query must end with a $.";
